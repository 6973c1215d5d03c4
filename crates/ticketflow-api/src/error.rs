use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use ticketflow_persist::PersistError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    BadRequest(String),

    #[error("Ticket not found")]
    TicketNotFound(String),

    /// Requester does not own the ticket
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Persist(#[from] PersistError),
}

impl ApiError {
    pub fn missing(message: &str) -> Self {
        ApiError::BadRequest(message.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::TicketNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::Persist(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::TicketNotFound(ticket_id) => {
                tracing::debug!(ticket_id = %ticket_id, "Ticket not found");
            }
            ApiError::Persist(e) => {
                tracing::error!("Persistence error: {}", e);
            }
            _ => {}
        }

        // Server-side failures carry the raw error text back to the caller
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());
        ApiError::missing("No data provided")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use serde::{Deserialize, Serialize};
use ticketflow_persist::TicketStore;
use ticketflow_types::{ChatEntry, Priority, Ticket, TicketStatus};
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusQuery {
    pub ticket_id: Option<String>,
    pub user_id: Option<String>,
}

/// Customer-facing view of a ticket
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusResponse {
    pub ticket_id: String,
    #[schema(value_type = String, example = "open")]
    pub status: TicketStatus,
    #[schema(value_type = String, example = "high")]
    pub priority: Priority,
    /// RFC 3339
    pub created_at: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub chat_history: Vec<ChatEntry>,
}

impl From<Ticket> for TicketStatusResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            ticket_id: ticket.ticket_id,
            status: ticket.status,
            priority: ticket.priority,
            created_at: Some(ticket.created_at.to_rfc3339()),
            chat_history: ticket.chat_history,
        }
    }
}

/// Read a ticket on behalf of its owner
pub async fn get_ticket_status(
    store: &dyn TicketStore,
    query: TicketStatusQuery,
) -> ApiResult<TicketStatusResponse> {
    let (Some(ticket_id), Some(user_id)) =
        (non_empty(query.ticket_id), non_empty(query.user_id))
    else {
        return Err(ApiError::missing("Missing ticketId or userId"));
    };

    let ticket = store
        .get_ticket(&ticket_id)
        .await?
        .ok_or_else(|| ApiError::TicketNotFound(ticket_id.clone()))?;

    if !ticket.is_owned_by(&user_id) {
        tracing::warn!(ticket_id = %ticket_id, user_id = %user_id, "Status read by non-owner");
        return Err(ApiError::Unauthorized);
    }

    Ok(ticket.into())
}

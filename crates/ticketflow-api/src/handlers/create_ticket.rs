use serde::{Deserialize, Serialize};
use ticketflow_persist::TicketStore;
use ticketflow_sentiment::SentimentAnalyzer;
use ticketflow_types::{Department, NewTicket, Priority, Sentiment, Ticket, TicketStatus};
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub user_id: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
}

impl CreateTicketRequest {
    pub fn validate(self) -> ApiResult<NewTicket> {
        match (
            non_empty(self.user_id),
            non_empty(self.subject),
            non_empty(self.description),
        ) {
            (Some(user_id), Some(subject), Some(description)) => Ok(NewTicket {
                user_id,
                subject,
                description,
            }),
            _ => Err(ApiError::missing("Missing required fields")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponse {
    pub ticket_id: String,
    #[schema(value_type = String, example = "medium")]
    pub priority: Priority,
    #[schema(value_type = String, example = "Support")]
    pub department: Department,
    #[schema(value_type = String, example = "open")]
    pub status: TicketStatus,
}

/// Open a ticket: score the description, derive priority and department,
/// and persist the new document.
///
/// A failing sentiment call is not fatal; the ticket is scored neutral.
pub async fn create_ticket(
    store: &dyn TicketStore,
    sentiment: &dyn SentimentAnalyzer,
    request: CreateTicketRequest,
) -> ApiResult<CreateTicketResponse> {
    let new_ticket = request.validate()?;

    let score = match sentiment.analyze(&new_ticket.description).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("Sentiment analysis failed, using neutral score: {:#}", e);
            Sentiment::neutral()
        }
    };

    let ticket = Ticket::open(new_ticket, score);
    store.create_ticket(&ticket).await?;

    tracing::info!(
        ticket_id = %ticket.ticket_id,
        user_id = %ticket.user_id,
        priority = %ticket.priority,
        department = %ticket.department,
        score = ticket.sentiment.score,
        "Ticket created"
    );

    Ok(CreateTicketResponse {
        ticket_id: ticket.ticket_id,
        priority: ticket.priority,
        department: ticket.department,
        status: ticket.status,
    })
}

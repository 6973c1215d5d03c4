use chrono::Utc;
use serde::{Deserialize, Serialize};
use ticketflow_persist::{PersistError, TicketStore};
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveTicketRequest {
    pub ticket_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolveTicketResponse {
    pub success: bool,
    pub message: String,
}

/// Close a ticket from the agent dashboard
pub async fn resolve_ticket(
    store: &dyn TicketStore,
    request: ResolveTicketRequest,
) -> ApiResult<ResolveTicketResponse> {
    let Some(ticket_id) = non_empty(request.ticket_id) else {
        return Err(ApiError::missing("Missing ticketId"));
    };

    match store.resolve_ticket(&ticket_id, Utc::now()).await {
        Ok(()) => {}
        Err(PersistError::TicketNotFound(id)) => return Err(ApiError::TicketNotFound(id)),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(ticket_id = %ticket_id, "Ticket resolved");

    Ok(ResolveTicketResponse {
        success: true,
        message: "Ticket resolved successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketflow_persist::InMemoryTicketStore;
    use ticketflow_types::{NewTicket, Sentiment, Ticket, TicketStatus};

    #[tokio::test]
    async fn test_resolve_sets_status() {
        let store = InMemoryTicketStore::new();
        let ticket = Ticket::open(
            NewTicket {
                user_id: "u".to_string(),
                subject: "s".to_string(),
                description: "d".to_string(),
            },
            Sentiment::neutral(),
        );
        store.create_ticket(&ticket).await.unwrap();

        let response = resolve_ticket(
            &store,
            ResolveTicketRequest {
                ticket_id: Some(ticket.ticket_id.clone()),
            },
        )
        .await
        .unwrap();
        assert!(response.success);

        let stored = store.get_ticket(&ticket.ticket_id).await.unwrap().unwrap();
        assert_eq!(stored.status, TicketStatus::Resolved);
        assert!(stored.resolved_at.is_some());
    }

    #[tokio::test]
    async fn test_resolve_unknown_is_not_found() {
        let store = InMemoryTicketStore::new();
        let err = resolve_ticket(
            &store,
            ResolveTicketRequest {
                ticket_id: Some("missing".to_string()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::TicketNotFound(_)));
    }
}

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ticketflow_persist::TicketStore;
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketRequest {
    pub ticket_id: Option<String>,
    pub agent_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignTicketResponse {
    pub success: bool,
    pub message: String,
}

/// Hand a ticket to an agent.
///
/// There is no existence check up front: the store reports an unknown id
/// as `TicketNotFound`, which surfaces as a 500 like any other store failure.
pub async fn assign_ticket(
    store: &dyn TicketStore,
    request: AssignTicketRequest,
) -> ApiResult<AssignTicketResponse> {
    let (Some(ticket_id), Some(agent_id)) =
        (non_empty(request.ticket_id), non_empty(request.agent_id))
    else {
        return Err(ApiError::missing("Missing ticketId or agentId"));
    };

    store.assign_ticket(&ticket_id, &agent_id, Utc::now()).await?;

    tracing::info!(ticket_id = %ticket_id, agent_id = %agent_id, "Ticket assigned");

    Ok(AssignTicketResponse {
        success: true,
        message: "Ticket assigned successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use ticketflow_persist::InMemoryTicketStore;
    use ticketflow_types::{NewTicket, Sentiment, Ticket, TicketStatus};

    #[tokio::test]
    async fn test_assign_moves_ticket_in_progress() {
        let store = InMemoryTicketStore::new();
        let ticket = Ticket::open(
            NewTicket {
                user_id: "user-1".to_string(),
                subject: "Help".to_string(),
                description: "Please".to_string(),
            },
            Sentiment::neutral(),
        );
        store.create_ticket(&ticket).await.unwrap();

        let response = assign_ticket(
            &store,
            AssignTicketRequest {
                ticket_id: Some(ticket.ticket_id.clone()),
                agent_id: Some("agent-42".to_string()),
            },
        )
        .await
        .unwrap();
        assert!(response.success);

        let stored = store.get_ticket(&ticket.ticket_id).await.unwrap().unwrap();
        assert_eq!(stored.status, TicketStatus::InProgress);
        assert_eq!(stored.assigned_agent.as_deref(), Some("agent-42"));
        assert!(stored.assigned_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_agent_is_bad_request() {
        let store = InMemoryTicketStore::new();
        let err = assign_ticket(
            &store,
            AssignTicketRequest {
                ticket_id: Some("t-1".to_string()),
                agent_id: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing ticketId or agentId");
    }

    #[tokio::test]
    async fn test_unknown_ticket_is_server_error() {
        let store = InMemoryTicketStore::new();
        let err = assign_ticket(
            &store,
            AssignTicketRequest {
                ticket_id: Some("does-not-exist".to_string()),
                agent_id: Some("agent-1".to_string()),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("does-not-exist"));
    }
}

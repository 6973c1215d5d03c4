use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticketflow_persist::TicketStore;
use ticketflow_types::{Department, Priority, Ticket, TicketStatus};
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTicketsQuery {
    pub user_id: Option<String>,
}

/// Which slice of the active queue an agent wants to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QueueFilter {
    #[default]
    All,
    /// Assigned to the requesting agent
    #[serde(alias = "my")]
    Mine,
    Unassigned,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentQueueQuery {
    pub agent_id: Option<String>,
    #[serde(default)]
    pub filter: QueueFilter,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub ticket_id: String,
    pub user_id: String,
    pub subject: String,
    #[schema(value_type = String, example = "open")]
    pub status: TicketStatus,
    #[schema(value_type = String, example = "high")]
    pub priority: Priority,
    #[schema(value_type = String, example = "IT")]
    pub department: Department,
    pub created_at: DateTime<Utc>,
    pub assigned_agent: Option<String>,
}

impl From<Ticket> for TicketSummary {
    fn from(ticket: Ticket) -> Self {
        Self {
            ticket_id: ticket.ticket_id,
            user_id: ticket.user_id,
            subject: ticket.subject,
            status: ticket.status,
            priority: ticket.priority,
            department: ticket.department,
            created_at: ticket.created_at,
            assigned_agent: ticket.assigned_agent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketSummary>,
}

impl From<Vec<Ticket>> for TicketListResponse {
    fn from(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: tickets.into_iter().map(TicketSummary::from).collect(),
        }
    }
}

/// A customer's own tickets, newest first
pub async fn list_user_tickets(
    store: &dyn TicketStore,
    query: UserTicketsQuery,
) -> ApiResult<TicketListResponse> {
    let Some(user_id) = non_empty(query.user_id) else {
        return Err(ApiError::missing("Missing userId"));
    };

    let tickets = store.list_user_tickets(&user_id).await?;
    Ok(tickets.into())
}

/// Active tickets for the agent dashboard, most urgent first and oldest
/// first within a priority.
pub async fn agent_queue(
    store: &dyn TicketStore,
    query: AgentQueueQuery,
) -> ApiResult<TicketListResponse> {
    let agent_id = non_empty(query.agent_id);
    if query.filter == QueueFilter::Mine && agent_id.is_none() {
        return Err(ApiError::missing("Missing agentId"));
    }

    let mut tickets: Vec<Ticket> = store
        .list_active_tickets()
        .await?
        .into_iter()
        .filter(|t| match query.filter {
            QueueFilter::All => true,
            QueueFilter::Mine => t.assigned_agent.as_deref() == agent_id.as_deref(),
            QueueFilter::Unassigned => t.assigned_agent.is_none(),
        })
        .collect();

    tickets.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    Ok(tickets.into())
}

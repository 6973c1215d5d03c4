use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ticketflow_types::{ChatEntry, Ticket};

use crate::error::Result;

/// Document collection of tickets keyed by ticket id
///
/// Mutations address a single document and fail with
/// `PersistError::TicketNotFound` when the id does not exist.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Insert a new ticket; an existing id fails with `DuplicateTicket`
    async fn create_ticket(&self, ticket: &Ticket) -> Result<()>;

    /// Get a ticket by id
    async fn get_ticket(&self, ticket_id: &str) -> Result<Option<Ticket>>;

    /// Hand a ticket to an agent and move it to `in_progress`
    async fn assign_ticket(
        &self,
        ticket_id: &str,
        agent_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Atomically append entries to the end of the chat history
    async fn append_chat(&self, ticket_id: &str, entries: Vec<ChatEntry>) -> Result<()>;

    /// Close a ticket
    async fn resolve_ticket(&self, ticket_id: &str, resolved_at: DateTime<Utc>) -> Result<()>;

    /// All tickets opened by a user, newest first
    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>>;

    /// Tickets that are open or in progress, in no particular order
    async fn list_active_tickets(&self) -> Result<Vec<Ticket>>;

    /// Cheap round trip to check the backend is reachable
    async fn ping(&self) -> Result<()>;
}

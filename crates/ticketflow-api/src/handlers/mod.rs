//! Business handlers, one per endpoint.
//!
//! Each handler is a plain async function over the store (and, for ticket
//! creation, the sentiment analyzer) so it can run against any backend.
//! The axum wrappers in `routes` only extract, call and wrap.

pub mod create_ticket;
pub mod assign_ticket;
pub mod chat;
pub mod ticket_status;
pub mod resolve_ticket;
pub mod listing;

pub use create_ticket::{create_ticket, CreateTicketRequest, CreateTicketResponse};
pub use assign_ticket::{assign_ticket, AssignTicketRequest, AssignTicketResponse};
pub use chat::{post_chat_message, ChatMessageRequest, ChatMessageResponse};
pub use ticket_status::{get_ticket_status, TicketStatusQuery, TicketStatusResponse};
pub use resolve_ticket::{resolve_ticket, ResolveTicketRequest, ResolveTicketResponse};
pub use listing::{
    agent_queue, list_user_tickets, AgentQueueQuery, QueueFilter, TicketListResponse,
    TicketSummary, UserTicketsQuery,
};

/// Treat absent, empty and whitespace-only fields alike
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

use utoipa::OpenApi;

use crate::handlers::{
    AssignTicketRequest, AssignTicketResponse, ChatMessageRequest, ChatMessageResponse,
    CreateTicketRequest, CreateTicketResponse, QueueFilter, ResolveTicketRequest,
    ResolveTicketResponse, TicketListResponse, TicketStatusResponse, TicketSummary,
};
use crate::routes::{chat, health, tickets};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ticketflow API",
        description = "Customer support ticketing: intake, routing, agent assignment and chat"
    ),
    paths(
        health::health_check,
        tickets::create_ticket,
        tickets::assign_ticket,
        tickets::get_ticket_status,
        tickets::list_user_tickets,
        tickets::agent_queue,
        tickets::resolve_ticket,
        chat::post_message,
    ),
    components(schemas(
        health::HealthResponse,
        CreateTicketRequest,
        CreateTicketResponse,
        AssignTicketRequest,
        AssignTicketResponse,
        ChatMessageRequest,
        ChatMessageResponse,
        TicketStatusResponse,
        TicketSummary,
        TicketListResponse,
        ResolveTicketRequest,
        ResolveTicketResponse,
        QueueFilter,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "tickets", description = "Customer ticket operations"),
        (name = "agents", description = "Agent dashboard operations"),
        (name = "chat", description = "Ticket chat")
    )
)]
pub struct ApiDoc;

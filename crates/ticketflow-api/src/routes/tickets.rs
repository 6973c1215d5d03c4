use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::{JsonBody, QueryParams},
    handlers::{
        self, AgentQueueQuery, AssignTicketRequest, AssignTicketResponse, CreateTicketRequest,
        CreateTicketResponse, ResolveTicketRequest, ResolveTicketResponse, TicketListResponse,
        TicketStatusQuery, TicketStatusResponse, UserTicketsQuery,
    },
    state::AppState,
};

/// Open a new support ticket
#[utoipa::path(
    post,
    path = "/create-ticket",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = CreateTicketResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTicketRequest>,
) -> ApiResult<(StatusCode, Json<CreateTicketResponse>)> {
    let response =
        handlers::create_ticket(state.store.as_ref(), state.sentiment.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Assign a ticket to an agent
#[utoipa::path(
    post,
    path = "/agent-assign",
    request_body = AssignTicketRequest,
    responses(
        (status = 200, description = "Ticket assigned", body = AssignTicketResponse),
        (status = 400, description = "Missing ticketId or agentId"),
        (status = 500, description = "Unexpected failure, including unknown ticket")
    ),
    tag = "agents"
)]
pub async fn assign_ticket(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AssignTicketRequest>,
) -> ApiResult<Json<AssignTicketResponse>> {
    let response = handlers::assign_ticket(state.store.as_ref(), req).await?;
    Ok(Json(response))
}

/// Get the status of a ticket owned by the caller
#[utoipa::path(
    get,
    path = "/get-ticket-status",
    params(
        ("ticketId" = String, Query, description = "Ticket ID"),
        ("userId" = String, Query, description = "Owner of the ticket")
    ),
    responses(
        (status = 200, description = "Ticket status", body = TicketStatusResponse),
        (status = 400, description = "Missing ticketId or userId"),
        (status = 403, description = "Caller does not own the ticket"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket_status(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<TicketStatusQuery>,
) -> ApiResult<Json<TicketStatusResponse>> {
    let response = handlers::get_ticket_status(state.store.as_ref(), query).await?;
    Ok(Json(response))
}

/// List a customer's tickets
#[utoipa::path(
    get,
    path = "/tickets",
    params(
        ("userId" = String, Query, description = "Owner of the tickets")
    ),
    responses(
        (status = 200, description = "Tickets, newest first", body = TicketListResponse),
        (status = 400, description = "Missing userId")
    ),
    tag = "tickets"
)]
pub async fn list_user_tickets(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<UserTicketsQuery>,
) -> ApiResult<Json<TicketListResponse>> {
    let response = handlers::list_user_tickets(state.store.as_ref(), query).await?;
    Ok(Json(response))
}

/// Active ticket queue for agents
#[utoipa::path(
    get,
    path = "/agent/tickets",
    params(
        ("agentId" = Option<String>, Query, description = "Requesting agent, required for filter=mine"),
        ("filter" = Option<String>, Query, description = "all (default), mine or unassigned")
    ),
    responses(
        (status = 200, description = "Open and in-progress tickets, most urgent first", body = TicketListResponse),
        (status = 400, description = "Invalid filter or missing agentId")
    ),
    tag = "agents"
)]
pub async fn agent_queue(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<AgentQueueQuery>,
) -> ApiResult<Json<TicketListResponse>> {
    let response = handlers::agent_queue(state.store.as_ref(), query).await?;
    Ok(Json(response))
}

/// Mark a ticket resolved
#[utoipa::path(
    post,
    path = "/resolve-ticket",
    request_body = ResolveTicketRequest,
    responses(
        (status = 200, description = "Ticket resolved", body = ResolveTicketResponse),
        (status = 400, description = "Missing ticketId"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "agents"
)]
pub async fn resolve_ticket(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ResolveTicketRequest>,
) -> ApiResult<Json<ResolveTicketResponse>> {
    let response = handlers::resolve_ticket(state.store.as_ref(), req).await?;
    Ok(Json(response))
}

pub mod chat;
pub mod health;
pub mod tickets;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    middleware::{cors, logging},
    state::AppState,
};

/// Assemble the full application: endpoints, API docs and middleware stack
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Customer endpoints
        .route("/create-ticket", post(tickets::create_ticket))
        .route("/get-ticket-status", get(tickets::get_ticket_status))
        .route("/tickets", get(tickets::list_user_tickets))
        .route("/chat-handler", post(chat::post_message))
        // Agent endpoints
        .route("/agent-assign", post(tickets::assign_ticket))
        .route("/agent/tickets", get(tickets::agent_queue))
        .route("/resolve-ticket", post(tickets::resolve_ticket));

    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn_with_state(state.clone(), cors::apply_cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

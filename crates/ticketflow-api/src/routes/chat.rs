use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::JsonBody,
    handlers::{self, ChatMessageRequest, ChatMessageResponse},
    state::AppState,
};

/// Post a chat message on a ticket and get the bot's reply
#[utoipa::path(
    post,
    path = "/chat-handler",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Bot reply", body = ChatMessageResponse),
        (status = 400, description = "Missing message or ticketId"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "chat"
)]
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ChatMessageRequest>,
) -> ApiResult<Json<ChatMessageResponse>> {
    let response = handlers::post_chat_message(state.store.as_ref(), req).await?;
    Ok(Json(response))
}

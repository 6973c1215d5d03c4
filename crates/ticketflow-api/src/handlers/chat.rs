use chrono::Utc;
use serde::{Deserialize, Serialize};
use ticketflow_persist::TicketStore;
use ticketflow_types::{scripted_reply, ChatEntry};
use utoipa::ToSchema;

use super::non_empty;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub message: Option<String>,
    pub ticket_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    pub reply: String,
}

/// Record a customer message and the bot's answer on the ticket.
///
/// Both entries go to the store in one append, user line first.
pub async fn post_chat_message(
    store: &dyn TicketStore,
    request: ChatMessageRequest,
) -> ApiResult<ChatMessageResponse> {
    let (Some(message), Some(ticket_id)) =
        (non_empty(request.message), non_empty(request.ticket_id))
    else {
        return Err(ApiError::missing("Missing message or ticketId"));
    };

    if store.get_ticket(&ticket_id).await?.is_none() {
        return Err(ApiError::TicketNotFound(ticket_id));
    }

    let reply = scripted_reply(&message);
    let now = Utc::now();
    store
        .append_chat(
            &ticket_id,
            vec![ChatEntry::user(message, now), ChatEntry::bot(reply, now)],
        )
        .await?;

    tracing::debug!(ticket_id = %ticket_id, "Chat exchange appended");

    Ok(ChatMessageResponse {
        reply: reply.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketflow_persist::InMemoryTicketStore;
    use ticketflow_types::{ChatSender, NewTicket, Sentiment, Ticket};

    async fn seeded_store() -> (InMemoryTicketStore, String) {
        let store = InMemoryTicketStore::new();
        let ticket = Ticket::open(
            NewTicket {
                user_id: "user-1".to_string(),
                subject: "Login".to_string(),
                description: "Locked out".to_string(),
            },
            Sentiment::neutral(),
        );
        store.create_ticket(&ticket).await.unwrap();
        (store, ticket.ticket_id)
    }

    #[tokio::test]
    async fn test_appends_user_then_bot() {
        let (store, ticket_id) = seeded_store().await;

        let response = post_chat_message(
            &store,
            ChatMessageRequest {
                message: Some("I forgot my password".to_string()),
                ticket_id: Some(ticket_id.clone()),
            },
        )
        .await
        .unwrap();
        assert!(response.reply.contains("reset your password"));

        let history = store.get_ticket(&ticket_id).await.unwrap().unwrap().chat_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, ChatSender::User);
        assert_eq!(history[0].message, "I forgot my password");
        assert_eq!(history[1].sender, ChatSender::Bot);
        assert_eq!(history[1].message, response.reply);
    }

    #[tokio::test]
    async fn test_history_grows_in_pairs() {
        let (store, ticket_id) = seeded_store().await;

        for message in ["hello", "thanks"] {
            post_chat_message(
                &store,
                ChatMessageRequest {
                    message: Some(message.to_string()),
                    ticket_id: Some(ticket_id.clone()),
                },
            )
            .await
            .unwrap();
        }

        let history = store.get_ticket(&ticket_id).await.unwrap().unwrap().chat_history;
        let messages: Vec<&str> = history.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], "hello");
        assert_eq!(messages[2], "thanks");
    }

    #[tokio::test]
    async fn test_missing_ticket_is_not_found() {
        let store = InMemoryTicketStore::new();
        let err = post_chat_message(
            &store,
            ChatMessageRequest {
                message: Some("hi".to_string()),
                ticket_id: Some("ghost".to_string()),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::TicketNotFound(ref id) if id == "ghost"));
        assert!(store.is_empty().await);
    }
}

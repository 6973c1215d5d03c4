use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use ticketflow_types::{ChatEntry, Ticket, TicketStatus};

use crate::error::{PersistError, Result};
use crate::store::TicketStore;

/// Process-local ticket store
///
/// Every mutation runs under the write lock, so chat appends from
/// concurrent requests never overwrite each other.
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    tickets: RwLock<HashMap<String, Ticket>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tickets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tickets.read().await.is_empty()
    }

    async fn update<F>(&self, ticket_id: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Ticket) + Send,
    {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .get_mut(ticket_id)
            .ok_or_else(|| {
                tracing::debug!(ticket_id = %ticket_id, "Update matched no ticket");
                PersistError::TicketNotFound(ticket_id.to_string())
            })?;
        apply(ticket);
        Ok(())
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn create_ticket(&self, ticket: &Ticket) -> Result<()> {
        let mut tickets = self.tickets.write().await;
        if tickets.contains_key(&ticket.ticket_id) {
            tracing::debug!(ticket_id = %ticket.ticket_id, "Ticket id already taken");
            return Err(PersistError::DuplicateTicket(ticket.ticket_id.clone()));
        }
        tickets.insert(ticket.ticket_id.clone(), ticket.clone());
        Ok(())
    }

    async fn get_ticket(&self, ticket_id: &str) -> Result<Option<Ticket>> {
        Ok(self.tickets.read().await.get(ticket_id).cloned())
    }

    async fn assign_ticket(
        &self,
        ticket_id: &str,
        agent_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Result<()> {
        self.update(ticket_id, |ticket| {
            ticket.assigned_agent = Some(agent_id.to_string());
            ticket.status = TicketStatus::InProgress;
            ticket.assigned_at = Some(assigned_at);
        })
        .await
    }

    async fn append_chat(&self, ticket_id: &str, entries: Vec<ChatEntry>) -> Result<()> {
        self.update(ticket_id, |ticket| ticket.chat_history.extend(entries))
            .await
    }

    async fn resolve_ticket(&self, ticket_id: &str, resolved_at: DateTime<Utc>) -> Result<()> {
        self.update(ticket_id, |ticket| {
            ticket.status = TicketStatus::Resolved;
            ticket.resolved_at = Some(resolved_at);
        })
        .await
    }

    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    async fn list_active_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.status.is_active())
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use ticketflow_types::{NewTicket, Sentiment};

    fn ticket_for(user_id: &str) -> Ticket {
        Ticket::open(
            NewTicket {
                user_id: user_id.to_string(),
                subject: "Login".to_string(),
                description: "Cannot login to the app".to_string(),
            },
            Sentiment::neutral(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryTicketStore::new();
        let ticket = ticket_for("user-1");

        store.create_ticket(&ticket).await.unwrap();

        let loaded = store.get_ticket(&ticket.ticket_id).await.unwrap();
        assert_eq!(loaded, Some(ticket));
        assert!(store.get_ticket("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let store = InMemoryTicketStore::new();
        let ticket = ticket_for("user-1");

        store.create_ticket(&ticket).await.unwrap();
        let err = store.create_ticket(&ticket).await.unwrap_err();

        assert!(matches!(err, PersistError::DuplicateTicket(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_assign_sets_agent_and_status() {
        let store = InMemoryTicketStore::new();
        let ticket = ticket_for("user-1");
        store.create_ticket(&ticket).await.unwrap();

        let now = Utc::now();
        store.assign_ticket(&ticket.ticket_id, "agent-7", now).await.unwrap();

        let loaded = store.get_ticket(&ticket.ticket_id).await.unwrap().unwrap();
        assert_eq!(loaded.assigned_agent.as_deref(), Some("agent-7"));
        assert_eq!(loaded.status, TicketStatus::InProgress);
        assert_eq!(loaded.assigned_at, Some(now));
    }

    #[tokio::test]
    async fn test_mutations_on_missing_ticket_fail() {
        let store = InMemoryTicketStore::new();

        let err = store.assign_ticket("nope", "agent", Utc::now()).await.unwrap_err();
        assert!(matches!(err, PersistError::TicketNotFound(ref id) if id == "nope"));

        let err = store.append_chat("nope", vec![]).await.unwrap_err();
        assert!(matches!(err, PersistError::TicketNotFound(_)));

        let err = store.resolve_ticket("nope", Utc::now()).await.unwrap_err();
        assert!(matches!(err, PersistError::TicketNotFound(_)));

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_every_entry() {
        let store = Arc::new(InMemoryTicketStore::new());
        let ticket = ticket_for("user-1");
        store.create_ticket(&ticket).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            let id = ticket.ticket_id.clone();
            handles.push(tokio::spawn(async move {
                let now = Utc::now();
                store
                    .append_chat(
                        &id,
                        vec![ChatEntry::user(format!("msg {}", i), now), ChatEntry::bot("ok", now)],
                    )
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let loaded = store.get_ticket(&ticket.ticket_id).await.unwrap().unwrap();
        assert_eq!(loaded.chat_history.len(), 40);
        // pairs stay adjacent
        for pair in loaded.chat_history.chunks(2) {
            assert_eq!(pair[0].sender, ticketflow_types::ChatSender::User);
            assert_eq!(pair[1].sender, ticketflow_types::ChatSender::Bot);
        }
    }

    #[tokio::test]
    async fn test_listing() {
        let store = InMemoryTicketStore::new();
        let first = ticket_for("user-1");
        let mut second = ticket_for("user-1");
        second.created_at = first.created_at + chrono::Duration::seconds(5);
        let other = ticket_for("user-2");

        for t in [&first, &second, &other] {
            store.create_ticket(t).await.unwrap();
        }
        store.resolve_ticket(&other.ticket_id, Utc::now()).await.unwrap();

        let mine = store.list_user_tickets("user-1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].ticket_id, second.ticket_id);

        let active = store.list_active_tickets().await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|t| t.user_id == "user-1"));
    }
}

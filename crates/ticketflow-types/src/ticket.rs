use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::department::{categorize_department, Department};
use crate::priority::Priority;

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
        }
    }

    /// Open and in-progress tickets show up in the agent queue
    pub fn is_active(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity of the ticket description as reported by the sentiment service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// In [-1, 1]
    pub score: f64,
    /// Non-negative
    pub magnitude: f64,
}

impl Sentiment {
    pub fn new(score: f64, magnitude: f64) -> Self {
        Self { score, magnitude }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

/// One line of a ticket's chat history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sender: ChatSender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn user(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            sender: ChatSender::User,
            message: message.into(),
            timestamp,
        }
    }

    pub fn bot(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            sender: ChatSender::Bot,
            message: message.into(),
            timestamp,
        }
    }
}

/// Validated input for opening a ticket
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub user_id: String,
    pub subject: String,
    pub description: String,
}

/// Support ticket document, keyed by `ticket_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: String,
    pub user_id: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub department: Department,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    pub assigned_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub chat_history: Vec<ChatEntry>,
}

impl Ticket {
    /// Open a fresh ticket: new id, no agent, empty chat, with priority and
    /// department derived from the input.
    pub fn open(new: NewTicket, sentiment: Sentiment) -> Self {
        let priority = Priority::from_sentiment_score(sentiment.score);
        let department = categorize_department(&new.subject, &new.description);

        Self {
            ticket_id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            subject: new.subject,
            description: new.description,
            status: TicketStatus::Open,
            priority,
            department,
            sentiment,
            created_at: Utc::now(),
            assigned_agent: None,
            assigned_at: None,
            resolved_at: None,
            chat_history: Vec::new(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_ticket() -> NewTicket {
        NewTicket {
            user_id: "user-1".to_string(),
            subject: "Billing issue".to_string(),
            description: "I was charged twice for my subscription".to_string(),
        }
    }

    #[test]
    fn test_open_ticket_defaults() {
        let ticket = Ticket::open(new_ticket(), Sentiment::new(-0.6, 0.9));

        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.department, Department::Finance);
        assert!(ticket.assigned_agent.is_none());
        assert!(ticket.assigned_at.is_none());
        assert!(ticket.chat_history.is_empty());
        assert!(ticket.is_owned_by("user-1"));
        assert!(!ticket.is_owned_by("user-2"));
    }

    #[test]
    fn test_ticket_ids_are_unique() {
        let a = Ticket::open(new_ticket(), Sentiment::neutral());
        let b = Ticket::open(new_ticket(), Sentiment::neutral());
        assert_ne!(a.ticket_id, b.ticket_id);
    }

    #[test]
    fn test_document_field_names() {
        let ticket = Ticket::open(new_ticket(), Sentiment::neutral());
        let value = serde_json::to_value(&ticket).unwrap();

        assert!(value.get("ticketId").is_some());
        assert!(value.get("userId").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["status"], "open");
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["assignedAgent"], serde_json::Value::Null);
        assert_eq!(value["chatHistory"], serde_json::json!([]));
        assert!(value.get("assignedAt").is_none());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&TicketStatus::InProgress).unwrap(), "\"in_progress\"");
        assert!(TicketStatus::InProgress.is_active());
        assert!(!TicketStatus::Resolved.is_active());
    }

    #[test]
    fn test_chat_entry_senders() {
        let now = Utc::now();
        let entry = ChatEntry::bot("hello", now);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["sender"], "bot");
        assert_eq!(ChatEntry::user("hi", now).sender, ChatSender::User);
    }
}

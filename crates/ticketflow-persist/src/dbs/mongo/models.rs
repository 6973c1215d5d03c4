use bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use ticketflow_types::{
    ChatEntry, ChatSender, Department, Priority, Sentiment, Ticket, TicketStatus,
};

/// MongoDB ticket document (`_id` is the ticket id, timestamps are BSON dates)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub department: Department,
    pub sentiment: Sentiment,
    pub created_at: BsonDateTime,
    pub assigned_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<BsonDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<BsonDateTime>,
    #[serde(default)]
    pub chat_history: Vec<MongoChatEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoChatEntry {
    pub sender: ChatSender,
    pub message: String,
    pub timestamp: BsonDateTime,
}

// Conversions between the domain model and the MongoDB document

impl From<&Ticket> for MongoTicket {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.ticket_id.clone(),
            user_id: ticket.user_id.clone(),
            subject: ticket.subject.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
            department: ticket.department,
            sentiment: ticket.sentiment,
            created_at: BsonDateTime::from_chrono(ticket.created_at),
            assigned_agent: ticket.assigned_agent.clone(),
            assigned_at: ticket.assigned_at.map(BsonDateTime::from_chrono),
            resolved_at: ticket.resolved_at.map(BsonDateTime::from_chrono),
            chat_history: ticket.chat_history.iter().map(MongoChatEntry::from).collect(),
        }
    }
}

impl From<MongoTicket> for Ticket {
    fn from(doc: MongoTicket) -> Self {
        Self {
            ticket_id: doc.id,
            user_id: doc.user_id,
            subject: doc.subject,
            description: doc.description,
            status: doc.status,
            priority: doc.priority,
            department: doc.department,
            sentiment: doc.sentiment,
            created_at: doc.created_at.to_chrono(),
            assigned_agent: doc.assigned_agent,
            assigned_at: doc.assigned_at.map(|d| d.to_chrono()),
            resolved_at: doc.resolved_at.map(|d| d.to_chrono()),
            chat_history: doc.chat_history.into_iter().map(ChatEntry::from).collect(),
        }
    }
}

impl From<&ChatEntry> for MongoChatEntry {
    fn from(entry: &ChatEntry) -> Self {
        Self {
            sender: entry.sender,
            message: entry.message.clone(),
            timestamp: BsonDateTime::from_chrono(entry.timestamp),
        }
    }
}

impl From<MongoChatEntry> for ChatEntry {
    fn from(entry: MongoChatEntry) -> Self {
        Self {
            sender: entry.sender,
            message: entry.message,
            timestamp: entry.timestamp.to_chrono(),
        }
    }
}

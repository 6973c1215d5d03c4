use async_trait::async_trait;
use bson::{doc, DateTime as BsonDateTime};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use ticketflow_types::{ChatEntry, Ticket, TicketStatus};

use crate::dbs::mongo::models::{MongoChatEntry, MongoTicket};
use crate::error::{PersistError, Result};
use crate::store::TicketStore;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Ticket store backed by a MongoDB collection
#[derive(Clone)]
pub struct MongoTicketStore {
    database: Database,
    collection: Collection<MongoTicket>,
}

impl MongoTicketStore {
    /// Connect to MongoDB and bind the ticket collection
    pub async fn connect(
        mongodb_uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client =
            Client::with_options(options).map_err(|e| PersistError::Connection(e.to_string()))?;

        Ok(Self::new(&client, database, collection))
    }

    pub fn new(client: &Client, db_name: &str, collection: &str) -> Self {
        let database = client.database(db_name);
        let collection = database.collection(collection);
        Self {
            database,
            collection,
        }
    }

    /// Run a single-document update, mapping "no match" to `TicketNotFound`
    async fn update_ticket(&self, ticket_id: &str, update: bson::Document) -> Result<()> {
        let result = self
            .collection
            .update_one(doc! { "_id": ticket_id }, update)
            .await?;

        if result.matched_count == 0 {
            tracing::debug!(ticket_id = %ticket_id, "Update matched no ticket");
            return Err(PersistError::TicketNotFound(ticket_id.to_string()));
        }
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref e)) if e.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl TicketStore for MongoTicketStore {
    async fn create_ticket(&self, ticket: &Ticket) -> Result<()> {
        let document = MongoTicket::from(ticket);
        match self.collection.insert_one(&document).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => {
                tracing::debug!(ticket_id = %ticket.ticket_id, "Duplicate key on ticket insert");
                Err(PersistError::DuplicateTicket(ticket.ticket_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_ticket(&self, ticket_id: &str) -> Result<Option<Ticket>> {
        let document = self.collection.find_one(doc! { "_id": ticket_id }).await?;
        Ok(document.map(Ticket::from))
    }

    async fn assign_ticket(
        &self,
        ticket_id: &str,
        agent_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Result<()> {
        let update = doc! {
            "$set": {
                "assignedAgent": agent_id,
                "status": TicketStatus::InProgress.as_str(),
                "assignedAt": BsonDateTime::from_chrono(assigned_at),
            }
        };
        self.update_ticket(ticket_id, update).await
    }

    async fn append_chat(&self, ticket_id: &str, entries: Vec<ChatEntry>) -> Result<()> {
        let entries: Vec<MongoChatEntry> = entries.iter().map(MongoChatEntry::from).collect();
        // $push is applied server-side, so concurrent appends cannot drop each other
        let update = doc! {
            "$push": {
                "chatHistory": { "$each": bson::to_bson(&entries)? }
            }
        };
        self.update_ticket(ticket_id, update).await
    }

    async fn resolve_ticket(&self, ticket_id: &str, resolved_at: DateTime<Utc>) -> Result<()> {
        let update = doc! {
            "$set": {
                "status": TicketStatus::Resolved.as_str(),
                "resolvedAt": BsonDateTime::from_chrono(resolved_at),
            }
        };
        self.update_ticket(ticket_id, update).await
    }

    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>> {
        let documents: Vec<MongoTicket> = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Ticket::from).collect())
    }

    async fn list_active_tickets(&self) -> Result<Vec<Ticket>> {
        let filter = doc! {
            "status": {
                "$in": [TicketStatus::Open.as_str(), TicketStatus::InProgress.as_str()]
            }
        };
        let documents: Vec<MongoTicket> = self
            .collection
            .find(filter)
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Ticket::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

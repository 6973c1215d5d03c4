mod client;
mod models;

pub use client::MongoTicketStore;
pub use models::{MongoChatEntry, MongoTicket};

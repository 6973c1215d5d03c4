pub mod error;
pub mod store;
pub mod memory;
pub mod dbs;

pub use error::{PersistError, Result};
pub use store::TicketStore;
pub use memory::InMemoryTicketStore;

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoTicketStore;

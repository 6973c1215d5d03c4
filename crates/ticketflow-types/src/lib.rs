pub mod ticket;
pub mod priority;
pub mod department;
pub mod reply;

pub use ticket::{ChatEntry, ChatSender, NewTicket, Sentiment, Ticket, TicketStatus};
pub use priority::Priority;
pub use department::{categorize_department, Department};
pub use reply::scripted_reply;

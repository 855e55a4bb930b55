pub mod schedule;
pub mod ticket;
pub mod search;
pub mod repository;

pub use schedule::{FareOffer, FareTable, Train};
pub use ticket::{Ticket, TicketAction, TicketStatus};
pub use search::SearchQuery;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

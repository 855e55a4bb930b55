pub mod selection;
pub mod manager;
pub mod booking;
pub mod tickets;

pub use selection::{Selection, ToggleOutcome};
pub use manager::{SelectionError, SelectionManager};
pub use booking::{BookingSummary, PassengerDetails};
pub use tickets::filter_tickets;

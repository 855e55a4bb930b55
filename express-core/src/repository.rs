use async_trait::async_trait;

use crate::schedule::Train;
use crate::ticket::{Ticket, TicketStatus};
use crate::CoreResult;

/// Read access to the train timetable
#[async_trait]
pub trait TrainRepository: Send + Sync {
    async fn list_trains(&self) -> CoreResult<Vec<Train>>;

    async fn get_train(&self, id: &str) -> CoreResult<Option<Train>>;
}

/// Read access to the customer's ticket history
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Tickets in source order, narrowed to `status` when given
    async fn list_tickets(&self, status: Option<TicketStatus>) -> CoreResult<Vec<Ticket>>;

    async fn get_ticket(&self, id: &str) -> CoreResult<Option<Ticket>>;
}

use async_trait::async_trait;
use express_core::repository::TicketRepository;
use express_core::{CoreResult, Ticket, TicketStatus};
use express_order::filter_tickets;

use crate::sample;

/// Serves a fixed ticket history
pub struct InMemoryTicketRepository {
    tickets: Vec<Ticket>,
}

impl InMemoryTicketRepository {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample::tickets())
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list_tickets(&self, status: Option<TicketStatus>) -> CoreResult<Vec<Ticket>> {
        let tickets = filter_tickets(&self.tickets, status);
        tracing::debug!("Listing {} tickets (filter: {:?})", tickets.len(), status);
        Ok(tickets)
    }

    async fn get_ticket(&self, id: &str) -> CoreResult<Option<Ticket>> {
        Ok(self.tickets.iter().find(|t| t.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_active_filter_on_sample_data() {
        let repo = InMemoryTicketRepository::with_sample_data();

        let active = repo.list_tickets(Some(TicketStatus::Active)).await.unwrap();
        assert_eq!(ids(&active), vec!["TK001", "TK002"]);
    }

    #[tokio::test]
    async fn test_no_filter_returns_all_in_order() {
        let repo = InMemoryTicketRepository::with_sample_data();

        let all = repo.list_tickets(None).await.unwrap();
        assert_eq!(ids(&all), vec!["TK001", "TK002", "TK003", "TK004"]);
    }

    #[tokio::test]
    async fn test_ticket_detail() {
        let repo = InMemoryTicketRepository::with_sample_data();

        let ticket = repo.get_ticket("TK004").await.unwrap().unwrap();
        assert_eq!(ticket.status, TicketStatus::Cancelled);
        assert!(repo.get_ticket("TK999").await.unwrap().is_none());
    }
}

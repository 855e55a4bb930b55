use std::sync::Arc;
use express_catalog::{SeatGenerator, SeatingConfig};
use express_core::repository::{TicketRepository, TrainRepository};
use express_order::SelectionManager;
use express_store::app_config::Config;
use express_store::{InMemoryTicketRepository, InMemoryTrainRepository};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub train_repo: Arc<dyn TrainRepository>,
    pub ticket_repo: Arc<dyn TicketRepository>,
    pub selections: Arc<Mutex<SelectionManager>>,
    pub seat_generator: Arc<Mutex<SeatGenerator>>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let ttl = chrono::Duration::from_std(std::time::Duration::from_secs(
            config.sessions.selection_ttl_seconds,
        ))?;
        Self::with_settings(config.seating.clone(), SelectionManager::with_ttl(ttl))
    }

    /// Sample timetable and tickets with the given seat-grid settings
    pub fn with_seating(seating: SeatingConfig) -> anyhow::Result<Self> {
        Self::with_settings(seating, SelectionManager::new())
    }

    pub fn with_settings(seating: SeatingConfig, selections: SelectionManager) -> anyhow::Result<Self> {
        let seat_generator = SeatGenerator::new(seating)?;

        Ok(Self {
            train_repo: Arc::new(InMemoryTrainRepository::with_sample_data()),
            ticket_repo: Arc::new(InMemoryTicketRepository::with_sample_data()),
            selections: Arc::new(Mutex::new(selections)),
            seat_generator: Arc::new(Mutex::new(seat_generator)),
        })
    }
}

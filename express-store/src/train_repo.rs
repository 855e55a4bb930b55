use async_trait::async_trait;
use express_core::repository::TrainRepository;
use express_core::{CoreResult, Train};

use crate::sample;

/// Serves a fixed timetable
pub struct InMemoryTrainRepository {
    trains: Vec<Train>,
}

impl InMemoryTrainRepository {
    pub fn new(trains: Vec<Train>) -> Self {
        Self { trains }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample::trains())
    }
}

#[async_trait]
impl TrainRepository for InMemoryTrainRepository {
    async fn list_trains(&self) -> CoreResult<Vec<Train>> {
        Ok(self.trains.clone())
    }

    async fn get_train(&self, id: &str) -> CoreResult<Option<Train>> {
        Ok(self.trains.iter().find(|t| t.id == id).cloned())
    }
}

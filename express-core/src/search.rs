use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub date: Option<NaiveDate>, // Departure day; trains are not filtered by it
}

impl SearchQuery {
    /// Origin, destination and date are all required before any results are shown
    pub fn validate(&self) -> CoreResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::ValidationError(format!("missing search fields: {}", missing.join(", "))))
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.origin.trim().is_empty() {
            missing.push("origin");
        }
        if self.destination.trim().is_empty() {
            missing.push("destination");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }

    /// Header shown above the results
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin.trim(), self.destination.trim())
    }
}

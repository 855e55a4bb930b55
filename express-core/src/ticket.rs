use chrono::{NaiveDate, NaiveTime};
use express_shared::FareClass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Classification of a historical booking. Fixed per record; nothing transitions it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Completed,
    Cancelled,
}

/// What the customer may do with a ticket in the given status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketAction {
    Download,
    Cancel,
    DownloadArchive,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Active => "active",
            TicketStatus::Completed => "completed",
            TicketStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Active => "Активен",
            TicketStatus::Completed => "Завершён",
            TicketStatus::Cancelled => "Отменён",
        }
    }

    pub fn actions(&self) -> &'static [TicketAction] {
        match self {
            TicketStatus::Active => &[TicketAction::Download, TicketAction::Cancel],
            TicketStatus::Completed => &[TicketAction::DownloadArchive],
            TicketStatus::Cancelled => &[],
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TicketStatus::Active),
            "completed" => Ok(TicketStatus::Completed),
            "cancelled" => Ok(TicketStatus::Cancelled),
            other => Err(CoreError::ValidationError(format!("unknown ticket status: {}", other))),
        }
    }
}

/// A previously booked trip shown on the "my tickets" page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub train_number: String,
    pub origin: String,
    pub destination: String,
    pub travel_date: NaiveDate,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub duration: String,
    pub fare_class: FareClass,
    /// Free text, e.g. "12, 13"
    pub seats: String,
    pub price: i32,
    pub status: TicketStatus,
    pub booked_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_actions() {
        assert_eq!(
            TicketStatus::Active.actions(),
            &[TicketAction::Download, TicketAction::Cancel]
        );
        assert_eq!(TicketStatus::Completed.actions(), &[TicketAction::DownloadArchive]);
        assert!(TicketStatus::Cancelled.actions().is_empty());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("completed".parse::<TicketStatus>().unwrap(), TicketStatus::Completed);
        assert!(matches!(
            "refunded".parse::<TicketStatus>(),
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(
            serde_json::to_string(&TicketAction::DownloadArchive).unwrap(),
            "\"download_archive\""
        );
    }
}

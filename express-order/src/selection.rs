use chrono::{DateTime, Utc};
use express_catalog::{pricing, Seat};
use express_core::Train;
use express_shared::FareClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of clicking a seat in the grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Seat is taken, off the grid, or no class is chosen
    Ignored,
}

/// One customer's in-progress choice of train, class and seats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub id: Uuid,
    pub train: Option<Train>,
    pub fare_class: Option<FareClass>,
    pub seat_map: Vec<Seat>,
    /// Chosen seat numbers in the order they were picked
    pub seats: Vec<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Selection {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            train: None,
            fare_class: None,
            seat_map: Vec::new(),
            seats: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Switch to a (train, class) pair with a freshly drawn grid. Always clears chosen seats.
    pub fn select_class(&mut self, train: Train, fare_class: FareClass, seat_map: Vec<Seat>) {
        self.train = Some(train);
        self.fare_class = Some(fare_class);
        self.seat_map = seat_map;
        self.seats.clear();
        self.updated_at = Utc::now();
    }

    pub fn toggle_seat(&mut self, number: u32) -> ToggleOutcome {
        if let Some(pos) = self.seats.iter().position(|&s| s == number) {
            self.seats.remove(pos);
            self.updated_at = Utc::now();
            return ToggleOutcome::Removed;
        }

        let free = self.seat_map.iter().any(|seat| seat.number == number && seat.available);
        if !free {
            return ToggleOutcome::Ignored;
        }

        self.seats.push(number);
        self.updated_at = Utc::now();
        ToggleOutcome::Added
    }

    pub fn is_selected(&self, number: u32) -> bool {
        self.seats.contains(&number)
    }

    /// Unit price of the chosen class on the chosen train
    pub fn unit_price(&self) -> Option<i32> {
        match (&self.train, self.fare_class) {
            (Some(train), Some(class)) => Some(train.fare(class).price),
            _ => None,
        }
    }

    /// Zero until both a train and a class are chosen
    pub fn total_price(&self) -> i32 {
        self.unit_price()
            .map(|price| pricing::total_price(self.seats.len(), price))
            .unwrap_or(0)
    }

    pub fn seats_label(&self) -> String {
        self.seats
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

use express_shared::{FareClass, Masked};
use serde::{Deserialize, Serialize};

use crate::manager::SelectionError;
use crate::selection::Selection;

/// Passenger form of the booking dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub last_name: String,
    pub first_name: String,
    /// Series and number, e.g. "1234 567890"
    pub passport: Masked<String>,
    #[serde(default)]
    pub email: Option<Masked<String>>,
    #[serde(default)]
    pub phone: Option<Masked<String>>,
}

/// What the customer is about to pay for. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub train_number: String,
    pub fare_class: FareClass,
    pub class_label: &'static str,
    pub seats: Vec<u32>,
    pub seats_label: String,
    pub unit_price: i32,
    pub total_price: i32,
    pub passenger: PassengerDetails,
}

impl BookingSummary {
    pub fn from_selection(selection: &Selection, passenger: PassengerDetails) -> Result<Self, SelectionError> {
        let (train, fare_class) = match (&selection.train, selection.fare_class) {
            (Some(train), Some(class)) => (train, class),
            _ => return Err(SelectionError::NothingSelected),
        };

        if selection.seats.is_empty() {
            return Err(SelectionError::NoSeatsSelected);
        }

        Ok(Self {
            train_number: train.number.clone(),
            fare_class,
            class_label: fare_class.label(),
            seats: selection.seats.clone(),
            seats_label: selection.seats_label(),
            unit_price: train.fare(fare_class).price,
            total_price: selection.total_price(),
            passenger,
        })
    }
}

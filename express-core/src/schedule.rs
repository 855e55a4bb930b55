use chrono::NaiveTime;
use express_shared::FareClass;
use serde::{Deserialize, Serialize};

/// Seats on sale and unit price (whole roubles) for one fare class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareOffer {
    pub available: u32,
    pub price: i32,
}

impl FareOffer {
    pub fn new(available: u32, price: i32) -> Self {
        Self { available, price }
    }

    /// A sold-out class cannot be chosen
    pub fn is_bookable(&self) -> bool {
        self.available > 0
    }
}

/// One offer per fare class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareTable {
    pub platzkart: FareOffer,
    pub coupe: FareOffer,
    pub sv: FareOffer,
}

impl FareTable {
    pub fn get(&self, class: FareClass) -> &FareOffer {
        match class {
            FareClass::Platzkart => &self.platzkart,
            FareClass::Coupe => &self.coupe,
            FareClass::Sv => &self.sv,
        }
    }

    /// Offers in display order
    pub fn iter(&self) -> impl Iterator<Item = (FareClass, &FareOffer)> + '_ {
        FareClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Train {
    pub id: String,
    pub number: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    /// Human-readable travel time, e.g. "20ч 15м"
    pub duration: String,
    pub fares: FareTable,
}

impl Train {
    pub fn fare(&self, class: FareClass) -> &FareOffer {
        self.fares.get(class)
    }
}

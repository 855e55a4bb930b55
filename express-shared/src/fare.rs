use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service tier of a train car
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FareClass {
    /// Open-plan reclining-seat car
    Platzkart,
    /// Four-berth compartment car
    Coupe,
    /// Two-berth deluxe compartment
    Sv,
}

impl FareClass {
    /// Display order used by the search results
    pub const ALL: [FareClass; 3] = [FareClass::Platzkart, FareClass::Coupe, FareClass::Sv];

    pub fn code(&self) -> &'static str {
        match self {
            FareClass::Platzkart => "platzkart",
            FareClass::Coupe => "coupe",
            FareClass::Sv => "sv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FareClass::Platzkart => "Плацкарт",
            FareClass::Coupe => "Купе",
            FareClass::Sv => "СВ",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FareClass {
    type Err = FareClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FareClass::ALL
            .into_iter()
            .find(|class| class.code() == s)
            .ok_or_else(|| FareClassError::Unknown(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FareClassError {
    #[error("Unknown fare class: {0}")]
    Unknown(String),
}

use express_core::FareOffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A single place in the seat grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    /// 1-based, sequential
    pub number: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    /// Seats added on top of the advertised availability when drawing the grid
    pub padding: u32,

    /// Chance that any one seat is drawn as taken
    pub unavailable_probability: f64,

    /// Fixed seed for reproducible grids; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            padding: 20,
            unavailable_probability: 0.3,
            seed: None,
        }
    }
}

/// Draws seat grids. Availability is random and is not reconciled with any inventory.
pub struct SeatGenerator {
    config: SeatingConfig,
    rng: StdRng,
}

impl SeatGenerator {
    pub fn new(config: SeatingConfig) -> Result<Self, SeatingError> {
        if !(0.0..=1.0).contains(&config.unavailable_probability) {
            return Err(SeatingError::InvalidProbability(config.unavailable_probability));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Grid size for a fare class: advertised availability plus padding.
    /// The availability figure is not enforced as the number of free seats drawn.
    pub fn seat_count(&self, offer: &FareOffer) -> u32 {
        offer.available.saturating_add(self.config.padding)
    }

    /// `count` seats numbered `1..=count`, each independently taken with the configured probability
    pub fn generate(&mut self, count: u32) -> Vec<Seat> {
        let probability = self.config.unavailable_probability;
        let seats: Vec<Seat> = (1..=count)
            .map(|number| Seat {
                number,
                available: !self.rng.gen_bool(probability),
            })
            .collect();

        tracing::debug!(
            "Generated seat map: {} seats, {} free",
            seats.len(),
            seats.iter().filter(|s| s.available).count()
        );
        seats
    }

    /// Seat grid for one fare class of a train
    pub fn generate_for(&mut self, offer: &FareOffer) -> Vec<Seat> {
        let count = self.seat_count(offer);
        self.generate(count)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeatingError {
    #[error("Unavailable probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> SeatGenerator {
        SeatGenerator::new(SeatingConfig { seed: Some(seed), ..SeatingConfig::default() }).unwrap()
    }

    #[test]
    fn test_seat_numbers_are_sequential_and_unique() {
        let mut generator = seeded(7);
        let seats = generator.generate(32);

        assert_eq!(seats.len(), 32);
        let numbers: HashSet<u32> = seats.iter().map(|s| s.number).collect();
        assert_eq!(numbers.len(), 32);
        assert!(seats.iter().all(|s| (1..=32).contains(&s.number)));
        assert_eq!(seats.first().unwrap().number, 1);
        assert_eq!(seats.last().unwrap().number, 32);
    }

    #[test]
    fn test_seat_count_adds_padding() {
        let mut generator = seeded(1);
        let offer = FareOffer::new(12, 4890);

        assert_eq!(generator.seat_count(&offer), 32);
        assert_eq!(generator.generate_for(&offer).len(), 32);
        assert_eq!(generator.generate_for(&FareOffer::new(0, 100)).len(), 20);
    }

    #[test]
    fn test_huge_padding_saturates() {
        let generator = SeatGenerator::new(SeatingConfig {
            padding: u32::MAX,
            ..SeatingConfig::default()
        })
        .unwrap();
        assert_eq!(generator.seat_count(&FareOffer::new(12, 4890)), u32::MAX);
    }

    #[test]
    fn test_zero_seats() {
        let mut generator = seeded(3);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = seeded(42).generate(40);
        let b = seeded(42).generate(40);
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability_extremes() {
        let mut all_taken = SeatGenerator::new(SeatingConfig {
            unavailable_probability: 1.0,
            seed: Some(5),
            ..SeatingConfig::default()
        })
        .unwrap();
        assert!(all_taken.generate(25).iter().all(|s| !s.available));

        let mut all_free = SeatGenerator::new(SeatingConfig {
            unavailable_probability: 0.0,
            seed: Some(5),
            ..SeatingConfig::default()
        })
        .unwrap();
        assert!(all_free.generate(25).iter().all(|s| s.available));
    }

    #[test]
    fn test_rough_unavailable_share() {
        let mut generator = seeded(2024);
        let seats = generator.generate(10_000);
        let taken = seats.iter().filter(|s| !s.available).count() as f64 / seats.len() as f64;
        assert!((taken - 0.3).abs() < 0.03);
    }

    #[test]
    fn test_invalid_probability() {
        let result = SeatGenerator::new(SeatingConfig {
            unavailable_probability: 1.5,
            ..SeatingConfig::default()
        });
        assert!(matches!(result, Err(SeatingError::InvalidProbability(_))));
    }
}

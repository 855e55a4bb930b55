pub mod seating;
pub mod pricing;

pub use seating::{Seat, SeatGenerator, SeatingConfig};
pub use pricing::total_price;

pub mod fare;
pub mod pii;

pub use fare::{FareClass, FareClassError};
pub use pii::Masked;

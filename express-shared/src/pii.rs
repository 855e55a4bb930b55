use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Characters kept in clear at the end of a long value, enough to tell two
/// passports apart in the logs.
const VISIBLE_TAIL: usize = 4;
/// Values this short are masked completely.
const MIN_PARTIAL_LEN: usize = 8;

/// Passenger data that must not reach the logs in full.
/// `Debug` and `Display` show only the last four characters of long values
/// (`*******3456`); serialization keeps the real value for API responses.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn masked(&self) -> String {
        let value = self.0.as_ref();
        let len = value.chars().count();
        if len <= MIN_PARTIAL_LEN {
            return "*".repeat(len.max(MIN_PARTIAL_LEN));
        }
        let tail: String = value.chars().skip(len - VISIBLE_TAIL).collect();
        format!("{}{}", "*".repeat(len - VISIBLE_TAIL), tail)
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

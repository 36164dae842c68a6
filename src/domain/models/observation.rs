use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Telegram user identifier; histories are keyed by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded game round: the multiplier and when it was captured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Game multiplier (coefficient)
    pub value: f64,

    /// Wall-clock capture time
    pub at: DateTime<Utc>,
}

impl Observation {
    pub const fn new(value: f64, at: DateTime<Utc>) -> Self {
        Self { value, at }
    }
}

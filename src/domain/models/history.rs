use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use super::observation::Observation;

/// Maximum number of observations retained per user
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded, chronologically ordered history of one user's observations.
///
/// Once the capacity is exceeded the oldest observations are evicted first.
#[derive(Debug, Clone, Default)]
pub struct UserHistory {
    observations: VecDeque<Observation>,
}

impl UserHistory {
    pub fn new() -> Self {
        Self {
            observations: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append one observation per value, all stamped with `at`, then drop
    /// from the front until at most [`HISTORY_CAPACITY`] remain.
    pub fn extend_at(&mut self, values: &[f64], at: DateTime<Utc>) {
        self.observations
            .extend(values.iter().map(|&value| Observation::new(value, at)));

        let overflow = self.observations.len().saturating_sub(HISTORY_CAPACITY);
        self.observations.drain(..overflow);
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Owned copy in chronological order
    pub fn to_vec(&self) -> Vec<Observation> {
        self.observations.iter().copied().collect()
    }
}

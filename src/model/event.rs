//! GrowthEvent — one historical observation from the history feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A component creation (+1) or removal (−1) at a point in time, typically
/// derived from version-control history by a history adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEvent {
    pub at: DateTime<Utc>,
    pub delta: i64,
}

impl GrowthEvent {
    pub fn new(at: DateTime<Utc>, delta: i64) -> Self {
        Self { at, delta }
    }

    /// A single component created at `at`.
    pub fn created(at: DateTime<Utc>) -> Self {
        Self { at, delta: 1 }
    }

    /// A single component removed at `at`.
    pub fn removed(at: DateTime<Utc>) -> Self {
        Self { at, delta: -1 }
    }
}

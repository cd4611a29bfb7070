//! Match momentum meter.
//!
//! Tracks which side currently has the edge as a single bounded integer,
//! fed by play-event impacts and classified into a coarse status for the
//! downstream reactions (crowd, team hooks, UI).
//!
//! The two entry points mirror team attribution at the call site: a home
//! play credits the meter, an away play debits it. Both apply the full
//! range clamp on every mutation, so any sequence of calls keeps the value
//! in [-100, 100].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::momentum;

/// Coarse classification of the meter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumStatus {
    /// Strictly above the high threshold: the home side has the edge.
    High,
    /// Strictly below the low threshold: the away side has the edge.
    Low,
    #[default]
    Neutral,
}

impl fmt::Display for MomentumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MomentumStatus::High => "High Momentum",
            MomentumStatus::Low => "Low Momentum",
            MomentumStatus::Neutral => "Neutral Momentum",
        };
        f.write_str(label)
    }
}

/// Bounded momentum accumulator.
///
/// Value range: -100 (away side owns the game) to +100 (home side does).
/// Starts neutral at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumMeter {
    value: i32,
}

impl MomentumMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit momentum toward the home end of the meter.
    ///
    /// Negative deltas are accepted; the net effect is a clamped add.
    pub fn increase_momentum(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(momentum::MIN, momentum::MAX);
    }

    /// Debit momentum toward the away end of the meter.
    ///
    /// Negative deltas are accepted; the net effect is a clamped subtract.
    pub fn decrease_momentum(&mut self, delta: i32) {
        self.value = self.value.saturating_sub(delta).clamp(momentum::MIN, momentum::MAX);
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Pure threshold classification of the current value.
    pub fn status(&self) -> MomentumStatus {
        if self.value > momentum::HIGH_THRESHOLD {
            MomentumStatus::High
        } else if self.value < momentum::LOW_THRESHOLD {
            MomentumStatus::Low
        } else {
            MomentumStatus::Neutral
        }
    }

    /// Create a meter at a specific value (for testing).
    #[doc(hidden)]
    pub fn with_value(value: i32) -> Self {
        Self { value: value.clamp(momentum::MIN, momentum::MAX) }
    }
}

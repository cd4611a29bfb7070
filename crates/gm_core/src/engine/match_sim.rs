//! Match orchestration: clock, score, and the authoritative momentum meter.
//!
//! `GameMatch` receives play events, resolves them against the injected
//! outcome provider, and feeds the resulting impact into the meter it owns.
//! Score and clock updates are independent of momentum and driven by the
//! caller. The engine never declares the match over.

use serde::{Deserialize, Serialize};

use crate::constants::clock;
use crate::engine::momentum::{MomentumMeter, MomentumStatus};
use crate::engine::outcome::OutcomeProvider;
use crate::models::{PlayEvent, Team};

/// Quarter clock.
///
/// Counts down within a quarter; exhausting the clock rolls the quarter and
/// restores the per-quarter duration. The quarter counter is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchClock {
    time_remaining: f32,
    quarter: u32,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self {
            time_remaining: clock::OPENING_CLOCK_SECS,
            quarter: clock::OPENING_QUARTER,
        }
    }
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burn `delta` seconds. Single transition per call: on exhaustion the
    /// quarter advances and the clock resets to the quarter length; the
    /// negative remainder is discarded, not carried over.
    pub fn advance(&mut self, delta: f32) {
        self.time_remaining -= delta;
        if self.time_remaining <= 0.0 {
            self.quarter += 1;
            self.time_remaining = clock::QUARTER_LENGTH_SECS;
            log::debug!("quarter {} begins", self.quarter);
        }
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }
}

/// One two-team contest in progress.
///
/// Owns the clock, the score, and the single authoritative momentum meter.
/// The teams are borrowed from the caller and never mutated by the match.
#[derive(Debug)]
pub struct GameMatch<'t> {
    clock: MatchClock,
    score: i32,
    momentum: MomentumMeter,
    home_team: &'t Team,
    away_team: &'t Team,
}

impl<'t> GameMatch<'t> {
    pub fn new(home_team: &'t Team, away_team: &'t Team) -> Self {
        Self {
            clock: MatchClock::new(),
            score: 0,
            momentum: MomentumMeter::new(),
            home_team,
            away_team,
        }
    }

    /// Additive score update. Point legality is not validated; negative
    /// adjustments are allowed and the score is unclamped.
    pub fn update_score(&mut self, points: i32) {
        self.score += points;
    }

    pub fn advance_time(&mut self, delta: f32) {
        self.clock.advance(delta);
    }

    /// Resolve a play and feed its impact straight into the owned meter.
    ///
    /// This is the simplified always-credit path: the impact goes through
    /// `increase_momentum` regardless of which team produced the play.
    /// Callers that care about attribution go through [`Self::momentum_mut`]
    /// and pick the direction themselves.
    pub fn trigger_play_event(
        &mut self,
        event: &mut PlayEvent,
        provider: &mut dyn OutcomeProvider,
    ) {
        event.resolve(provider);
        let impact = event.momentum_impact();
        self.momentum.increase_momentum(impact);
        log::debug!("play '{}' impact {impact:+}, momentum {}", event.play_type(), self.momentum.value());
    }

    /// The authoritative meter, read-only.
    pub fn momentum(&self) -> &MomentumMeter {
        &self.momentum
    }

    /// Attribution-aware update capability for the driving loop.
    pub fn momentum_mut(&mut self) -> &mut MomentumMeter {
        &mut self.momentum
    }

    pub fn momentum_status(&self) -> MomentumStatus {
        self.momentum.status()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn quarter(&self) -> u32 {
        self.clock.quarter()
    }

    pub fn time_remaining(&self) -> f32 {
        self.clock.time_remaining()
    }

    pub fn home_team(&self) -> &Team {
        self.home_team
    }

    pub fn away_team(&self) -> &Team {
        self.away_team
    }
}

//! Play events: discrete, resolvable scoring attempts.

use serde::{Deserialize, Serialize};

use crate::constants::impact;
use crate::engine::outcome::OutcomeProvider;

/// One discrete play attempt with a binary success outcome.
///
/// A play starts unresolved and worth nothing. [`PlayEvent::resolve`]
/// consults the outcome provider; success fixes the point value exactly
/// once. There is deliberately no separate "failed" state: a play that
/// failed and a play that never ran are the same observable thing, and both
/// feed the failure penalty into the meter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayEvent {
    play_type: String,
    resolved: bool,
    points_earned: i32,
}

impl PlayEvent {
    pub fn new(play_type: impl Into<String>) -> Self {
        Self { play_type: play_type.into(), resolved: false, points_earned: 0 }
    }

    /// Resolve the play against the outcome provider.
    ///
    /// On success, marks the play resolved and fixes its point value. On
    /// failure the play is left untouched. A play already resolved stays
    /// resolved; its fields are set at most once.
    pub fn resolve(&mut self, provider: &mut dyn OutcomeProvider) {
        if self.resolved {
            return;
        }
        if provider.next_outcome() {
            self.resolved = true;
            self.points_earned = impact::SUCCESS_POINTS;
            log::debug!("play '{}' succeeded for {} points", self.play_type, self.points_earned);
        } else {
            log::debug!("play '{}' failed", self.play_type);
        }
    }

    /// Signed momentum impact of this play. Pure and idempotent: the earned
    /// points when resolved, the fixed failure penalty otherwise.
    pub fn momentum_impact(&self) -> i32 {
        if self.resolved {
            self.points_earned
        } else {
            impact::FAILURE_PENALTY
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn points_earned(&self) -> i32 {
        self.points_earned
    }

    pub fn play_type(&self) -> &str {
        &self.play_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::ScriptedOutcomes;

    #[test]
    fn test_successful_play_is_worth_seven() {
        let mut provider = ScriptedOutcomes::new([true]);
        let mut play = PlayEvent::new("Touchdown Attempt");
        play.resolve(&mut provider);

        assert!(play.is_resolved());
        assert_eq!(play.points_earned(), 7);
        assert_eq!(play.momentum_impact(), 7);
    }

    #[test]
    fn test_failed_play_yields_penalty() {
        let mut provider = ScriptedOutcomes::new([false]);
        let mut play = PlayEvent::new("Touchdown Attempt");
        play.resolve(&mut provider);

        assert!(!play.is_resolved());
        assert_eq!(play.points_earned(), 0);
        assert_eq!(play.momentum_impact(), -5);
    }

    #[test]
    fn test_unresolved_play_yields_penalty() {
        let play = PlayEvent::new("Field Goal Attempt");
        assert_eq!(play.momentum_impact(), -5);
    }

    #[test]
    fn test_momentum_impact_is_idempotent() {
        let mut provider = ScriptedOutcomes::new([true]);
        let mut play = PlayEvent::new("Touchdown Attempt");
        play.resolve(&mut provider);

        assert_eq!(play.momentum_impact(), play.momentum_impact());
        assert_eq!(play.points_earned(), 7);
    }

    #[test]
    fn test_resolve_sets_fields_at_most_once() {
        // A second resolve draws nothing further from the provider and a
        // later failure outcome cannot unset a success.
        let mut provider = ScriptedOutcomes::new([true, false]);
        let mut play = PlayEvent::new("Touchdown Attempt");
        play.resolve(&mut provider);
        play.resolve(&mut provider);

        assert!(play.is_resolved());
        assert_eq!(play.points_earned(), 7);
        assert!(!provider.is_exhausted(), "second resolve must not consume an outcome");
    }

    #[test]
    fn test_exhausted_provider_resolves_as_failure() {
        let mut provider = ScriptedOutcomes::new([]);
        let mut play = PlayEvent::new("Touchdown Attempt");
        play.resolve(&mut provider);

        assert!(!play.is_resolved());
        assert_eq!(play.momentum_impact(), -5);
    }
}

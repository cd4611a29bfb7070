//! Hype actions: optional bonus-momentum triggers.
//!
//! Orthogonal add-on. Nothing in the match loop fires these; a caller
//! invokes one manually inside its timing window and applies the fixed
//! bonus on success.

use serde::{Deserialize, Serialize};

use crate::constants::impact;
use crate::engine::momentum::MomentumMeter;
use crate::engine::outcome::OutcomeProvider;
use crate::sink::PresentationSink;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HypeAction {
    action_type: String,
    timing_window_secs: f32,
    /// Advertised success rate. Recorded for display; the actual draw comes
    /// from the injected provider so scenarios stay deterministic.
    success_rate: f32,
}

impl HypeAction {
    pub fn new(
        action_type: impl Into<String>,
        timing_window_secs: f32,
        success_rate: f32,
    ) -> Self {
        Self {
            action_type: action_type.into(),
            timing_window_secs,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    /// Whether `elapsed_secs` still falls inside the action's window.
    pub fn is_within_window(&self, elapsed_secs: f32) -> bool {
        (0.0..=self.timing_window_secs).contains(&elapsed_secs)
    }

    /// Attempt the action. The caller applies the bonus on a `true` return.
    pub fn execute_action(
        &self,
        provider: &mut dyn OutcomeProvider,
        sink: &mut dyn PresentationSink,
    ) -> bool {
        sink.present(&format!("Executing hype action: {}", self.action_type));
        provider.next_outcome()
    }

    /// Feed the fixed hype bonus into a meter.
    pub fn apply_momentum_bonus(&self, meter: &mut MomentumMeter, sink: &mut dyn PresentationSink) {
        meter.increase_momentum(impact::HYPE_BONUS);
        sink.present("Momentum boosted by hype action!");
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn success_rate(&self) -> f32 {
        self.success_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::ScriptedOutcomes;
    use crate::sink::{NullSink, RecordingSink};

    fn drum_line() -> HypeAction {
        HypeAction::new("Drum Line", 30.0, 0.5)
    }

    #[test]
    fn test_timing_window_is_inclusive() {
        let action = drum_line();
        assert!(action.is_within_window(0.0));
        assert!(action.is_within_window(30.0));
        assert!(!action.is_within_window(30.1));
        assert!(!action.is_within_window(-1.0));
    }

    #[test]
    fn test_bonus_is_fixed_at_ten() {
        let mut meter = MomentumMeter::new();
        drum_line().apply_momentum_bonus(&mut meter, &mut NullSink);
        assert_eq!(meter.value(), 10);
    }

    #[test]
    fn test_bonus_respects_the_ceiling() {
        let mut meter = MomentumMeter::with_value(95);
        drum_line().apply_momentum_bonus(&mut meter, &mut NullSink);
        assert_eq!(meter.value(), 100);
    }

    #[test]
    fn test_execute_action_draws_from_the_provider() {
        let mut sink = RecordingSink::new();
        let mut provider = ScriptedOutcomes::new([true, false]);
        let action = drum_line();

        assert!(action.execute_action(&mut provider, &mut sink));
        assert!(!action.execute_action(&mut provider, &mut sink));
        assert!(sink.saw("Drum Line"));
    }

    #[test]
    fn test_success_rate_is_clamped_to_unit_range() {
        assert_eq!(HypeAction::new("Wave", 10.0, 1.8).success_rate(), 1.0);
        assert_eq!(HypeAction::new("Wave", 10.0, -0.3).success_rate(), 0.0);
    }
}

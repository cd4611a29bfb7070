//! Boolean outcome providers for play resolution.
//!
//! The reference design seeded a process-wide generator once from the wall
//! clock. Here the source is an explicitly passed, seedable capability so
//! every scenario is reproducible: same seed, same outcome sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Success/failure source consumed by play resolution.
pub trait OutcomeProvider {
    fn next_outcome(&mut self) -> bool;
}

/// Fair-coin provider backed by a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededOutcomeProvider {
    rng: ChaCha8Rng,
}

impl SeededOutcomeProvider {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl OutcomeProvider for SeededOutcomeProvider {
    fn next_outcome(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed outcome script.
///
/// An exhausted script keeps answering failure: an unavailable provider is
/// a deterministic failure outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    outcomes: VecDeque<bool>,
}

impl ScriptedOutcomes {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self { outcomes: outcomes.into_iter().collect() }
    }

    pub fn is_exhausted(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl OutcomeProvider for ScriptedOutcomes {
    fn next_outcome(&mut self) -> bool {
        self.outcomes.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededOutcomeProvider::from_seed(42);
        let mut b = SeededOutcomeProvider::from_seed(42);

        for _ in 0..64 {
            assert_eq!(a.next_outcome(), b.next_outcome());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededOutcomeProvider::from_seed(1);
        let mut b = SeededOutcomeProvider::from_seed(2);

        let seq_a: Vec<bool> = (0..64).map(|_| a.next_outcome()).collect();
        let seq_b: Vec<bool> = (0..64).map(|_| b.next_outcome()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_scripted_outcomes_replay_in_order() {
        let mut provider = ScriptedOutcomes::new([true, false, true]);
        assert!(provider.next_outcome());
        assert!(!provider.next_outcome());
        assert!(provider.next_outcome());
        assert!(provider.is_exhausted());
    }

    #[test]
    fn test_exhausted_script_answers_failure() {
        let mut provider = ScriptedOutcomes::new([]);
        assert!(!provider.next_outcome());
        assert!(!provider.next_outcome());
    }
}

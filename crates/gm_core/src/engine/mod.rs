//! Momentum propagation engine.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `momentum` | Bounded meter and status classification |
//! | `match_sim` | Clock, score, play-event orchestration |
//! | `outcome` | Injected success/failure providers |

pub mod match_sim;
pub mod momentum;
pub mod outcome;

pub use match_sim::{GameMatch, MatchClock};
pub use momentum::{MomentumMeter, MomentumStatus};
pub use outcome::{OutcomeProvider, ScriptedOutcomes, SeededOutcomeProvider};

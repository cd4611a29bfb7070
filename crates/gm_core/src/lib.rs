//! # gm_core - Deterministic Momentum Propagation Engine
//!
//! Models the evolving momentum state of a two-team gridiron contest across
//! discrete play events and drives the downstream reactions (crowd energy,
//! team morale hooks, UI prompts) from that state.
//!
//! ## Features
//! - 100% deterministic resolution (same seed = same scenario)
//! - Bounded momentum meter with coarse status classification
//! - Injected outcome-provider and presentation-sink capabilities
//! - JSON API for scripted scenarios
//!
//! Single-threaded and synchronous by design: one `GameMatch` per logical
//! thread of control, no shared mutable state, no global RNG.

pub mod api;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod reactions;
pub mod sink;

// Re-export main API functions
pub use api::{run_scenario, run_scenario_json, ScenarioConfig, ScenarioRequest, ScenarioResponse};
pub use error::{Result, ScenarioError};

// Re-export engine types
pub use engine::{
    GameMatch, MatchClock, MomentumMeter, MomentumStatus, OutcomeProvider, ScriptedOutcomes,
    SeededOutcomeProvider,
};

// Re-export model and reaction types
pub use models::{PlayEvent, Player, Position, Team};
pub use reactions::{Crowd, HypeAction, UIController};
pub use sink::{LogSink, NullSink, PresentationSink, RecordingSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

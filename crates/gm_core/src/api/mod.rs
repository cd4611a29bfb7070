//! Public scenario API.

pub mod json_api;

pub use json_api::{
    run_scenario, run_scenario_json, PlayRecord, ScenarioConfig, ScenarioRequest,
    ScenarioResponse, DEFAULT_PLAYS,
};

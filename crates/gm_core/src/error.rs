use thiserror::Error;

/// Errors surfaced at the JSON scenario boundary.
///
/// The engine itself has no failure modes: clock, score, meter and reaction
/// updates are total functions. Only request parsing and response encoding
/// can fail.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for ScenarioError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScenarioError::Deserialization(err.to_string())
        } else {
            ScenarioError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

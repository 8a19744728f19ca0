use analytics::AnalyticsError;
use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Invalid forecast input: {0}")]
    InvalidInput(String),

    #[error("Scenario '{0}' is defined more than once")]
    DuplicateScenario(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load the unit-economics configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid unit-economics configuration: {0}")]
    ValidationError(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error("Error in calculation: {0}")]
    Calculation(String),
}

impl AnalyticsError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AnalyticsError::InvalidInput(field.to_string(), reason.into())
    }
}

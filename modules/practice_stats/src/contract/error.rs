use thiserror::Error;

/// Errors that are safe to expose to consumers of the module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PracticeStatsError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Practice data is temporarily unavailable")]
    Unavailable,
}

impl PracticeStatsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self::Unavailable
    }
}

impl From<crate::domain::error::DomainError> for PracticeStatsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            InvalidMinutes { minutes, max } => Self::validation(format!(
                "Practice minutes must be between 1 and {max} (got {minutes})"
            )),
            InvalidMonth { year, month } => {
                Self::validation(format!("Invalid calendar month: {year}-{month:02}"))
            }
            Validation { field, message } => Self::validation(format!("{field}: {message}")),
            Store { .. } | StreakUnavailable { .. } => Self::unavailable(),
        }
    }
}

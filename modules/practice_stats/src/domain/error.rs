use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Practice minutes out of range: {minutes} (allowed: 1..={max})")]
    InvalidMinutes { minutes: u32, max: u32 },

    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Record store error: {message}")]
    Store { message: String },

    #[error("Streak unavailable: {message}")]
    StreakUnavailable { message: String },
}

impl DomainError {
    pub fn invalid_minutes(minutes: u32, max: u32) -> Self {
        Self::InvalidMinutes { minutes, max }
    }

    pub fn invalid_month(year: i32, month: u32) -> Self {
        Self::InvalidMonth { year, month }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn streak_unavailable(message: impl Into<String>) -> Self {
        Self::StreakUnavailable {
            message: message.into(),
        }
    }
}

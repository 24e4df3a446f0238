use std::fmt::Display;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A supplied string cannot be parsed as a decimal amount for a currency
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A negative or out-of-range value passed to rate scaling.
    /// Contract violation: user input is pre-validated before it gets here.
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote exchange-rate source errors
    #[error("Rate source error: {0}")]
    RateSource(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_amount(msg: impl Display) -> Self {
        AppError::InvalidAmount(msg.to_string())
    }

    pub fn invalid_rate(msg: impl Display) -> Self {
        AppError::InvalidRate(msg.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn rate_source(msg: impl Into<String>) -> Self {
        AppError::RateSource(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

use thiserror::Error;

/// Application-wide error types for Vetrina.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// A unique value already exists (duplicate newsletter email).
    #[error("{0}")]
    Conflict(String),

    /// No record matches the given identifier.
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Bad or missing environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Returns true if the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Conflict(_)
                | AppError::NotFound(_)
                | AppError::Serialization(_)
        )
    }
}

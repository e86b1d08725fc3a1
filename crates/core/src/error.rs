// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// Malformed id or request field
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup, update or delete targeted a nonexistent id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying store operation failed
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Unavailable(String)

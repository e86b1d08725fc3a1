// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid queue name: {0}")]
    InvalidQueueName(String),

    #[error("Invalid holder name: {0}")]
    InvalidHolderName(String),

    #[error("Invalid contact number: {0}")]
    InvalidContactNumber(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Token numbers exhausted for queue {0}")]
    TokenNumbersExhausted(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

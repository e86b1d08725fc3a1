// Domain Layer - Pure business logic and entities

pub mod error;
pub mod queue;
pub mod token;
pub mod validation;

// Re-exports
pub use error::DomainError;
pub use queue::{Queue, QueueId, QueueState};
pub use token::{Token, TokenId, TokenNumber};

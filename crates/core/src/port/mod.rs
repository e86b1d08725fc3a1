// Port Layer - Interfaces for external dependencies

pub mod id_provider; // Store-assigned identities
pub mod queue_repository;
pub mod time_provider;
pub mod token_repository;

// Re-exports
pub use id_provider::IdProvider;
pub use queue_repository::{QueueChanges, QueueRepository};
pub use time_provider::TimeProvider;
pub use token_repository::{SortOrder, TokenRepository, TokenScan};

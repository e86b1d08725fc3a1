// SimplQ Infrastructure - SQLite Adapter
// Implements: QueueRepository, TokenRepository

mod connection;
mod error;
mod migration;
mod queue_repository;
mod token_repository;

pub use connection::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use migration::run_migrations;
pub use queue_repository::SqliteQueueRepository;
pub use token_repository::SqliteTokenRepository;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)

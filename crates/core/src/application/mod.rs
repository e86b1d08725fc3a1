// Application Layer - Use Cases and Business Logic

pub mod queue_service;
pub mod sequencer;

// Re-exports
pub use queue_service::{CreateQueueRequest, EnrollRequest, QueueService};
pub use sequencer::{LockScope, TokenReservation, TokenSequencer};

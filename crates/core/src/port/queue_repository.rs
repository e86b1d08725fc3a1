// Queue Repository Port (Interface)

use crate::domain::{Queue, QueueId};
use crate::error::Result;
use async_trait::async_trait;

/// Field changes applied by `QueueRepository::update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueChanges {
    pub is_paused: Option<bool>,
}

impl QueueChanges {
    pub fn paused(is_paused: bool) -> Self {
        Self {
            is_paused: Some(is_paused),
        }
    }
}

/// Repository interface for Queue persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Insert a new queue. Any id on the record is ignored; returns the store-assigned id.
    async fn insert(&self, queue: &Queue) -> Result<QueueId>;

    /// Find queue by ID (tokens are not populated)
    async fn find_by_id(&self, id: &str) -> Result<Option<Queue>>;

    /// Apply field changes; returns the number of matched records
    async fn update(&self, id: &str, changes: &QueueChanges) -> Result<u64>;

    /// Delete queue record only; returns the number of deleted records
    async fn delete(&self, id: &str) -> Result<u64>;
}

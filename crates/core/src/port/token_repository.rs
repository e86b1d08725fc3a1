// Token Repository Port (Interface)

use crate::domain::{QueueId, Token, TokenId};
use crate::error::Result;
use async_trait::async_trait;

/// Ordering of a token scan, by token number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filtered, sorted, optionally limited scan over one queue's tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScan {
    pub queue_id: QueueId,
    pub order: SortOrder,
    pub limit: Option<u32>,
}

impl TokenScan {
    /// Highest-numbered token of a queue (descending, limit 1)
    pub fn latest(queue_id: impl Into<QueueId>) -> Self {
        Self {
            queue_id: queue_id.into(),
            order: SortOrder::Descending,
            limit: Some(1),
        }
    }

    /// Every token of a queue in issue order
    pub fn all_ascending(queue_id: impl Into<QueueId>) -> Self {
        Self {
            queue_id: queue_id.into(),
            order: SortOrder::Ascending,
            limit: None,
        }
    }
}

/// Repository interface for Token persistence
///
/// Offers no atomic increment; number allocation goes through
/// `application::sequencer::TokenSequencer`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new token. Any id on the record is ignored; returns the store-assigned id.
    async fn insert(&self, token: &Token) -> Result<TokenId>;

    /// Find token by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Token>>;

    /// Scan tokens of one queue
    async fn scan(&self, scan: &TokenScan) -> Result<Vec<Token>>;
}

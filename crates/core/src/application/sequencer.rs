// Token Sequencer
//
// Allocates per-queue token numbers (max + 1) on top of a store with no
// atomic increment. The read of the current maximum and the insert of the
// new token must form one critical section: `next_number` hands out a
// `TokenReservation` that keeps the lock until it is dropped, so callers
// insert while holding it.

use crate::domain::{DomainError, QueueId, TokenNumber};
use crate::error::Result;
use crate::port::{TokenRepository, TokenScan};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

type LockRegistry = DashMap<QueueId, Arc<Mutex<()>>>;

/// Granularity of the enrollment lock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockScope {
    /// One lock for every queue. Enrollments into different queues also
    /// serialize.
    #[default]
    Global,
    /// One lock per queue id, created on first use and evicted once no
    /// reservation holds or waits on it.
    PerQueue,
}

impl std::fmt::Display for LockScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockScope::Global => write!(f, "global"),
            LockScope::PerQueue => write!(f, "per_queue"),
        }
    }
}

enum Locks {
    Global(Arc<Mutex<()>>),
    PerQueue(Arc<LockRegistry>),
}

/// Held enrollment lock. Releases on drop and, for per-queue locks,
/// evicts the registry entry when nobody else references it.
struct LockHold {
    guard: Option<OwnedMutexGuard<()>>,
    registry: Option<(Arc<LockRegistry>, QueueId)>,
}

impl Drop for LockHold {
    fn drop(&mut self) {
        // Unlock first so the guard's reference to the mutex is gone
        drop(self.guard.take());

        if let Some((registry, queue_id)) = self.registry.take() {
            registry.remove_if(&queue_id, |_, lock| Arc::strong_count(lock) == 1);
        }
    }
}

/// A token number allocated for one queue, valid while the lock is held.
///
/// Insert the token before dropping the reservation. Dropping it (including
/// on an error path) releases the lock.
pub struct TokenReservation {
    queue_id: QueueId,
    number: TokenNumber,
    _hold: LockHold,
}

impl TokenReservation {
    pub fn number(&self) -> TokenNumber {
        self.number
    }

    pub fn queue_id(&self) -> &str {
        &self.queue_id
    }
}

impl std::fmt::Debug for TokenReservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenReservation")
            .field("queue_id", &self.queue_id)
            .field("number", &self.number)
            .finish()
    }
}

/// Token Sequencer
///
/// Owns the enrollment lock(s) for the lifetime of the process. Construct
/// one instance at startup and share it behind an `Arc`.
pub struct TokenSequencer {
    token_repo: Arc<dyn TokenRepository>,
    locks: Locks,
}

impl TokenSequencer {
    pub fn new(token_repo: Arc<dyn TokenRepository>, scope: LockScope) -> Self {
        let locks = match scope {
            LockScope::Global => Locks::Global(Arc::new(Mutex::new(()))),
            LockScope::PerQueue => Locks::PerQueue(Arc::new(DashMap::new())),
        };
        Self { token_repo, locks }
    }

    pub fn scope(&self) -> LockScope {
        match self.locks {
            Locks::Global(_) => LockScope::Global,
            Locks::PerQueue(_) => LockScope::PerQueue,
        }
    }

    /// Lock, read the queue's current maximum and reserve `max + 1`.
    ///
    /// If the scan fails the lock is released and no number is produced.
    pub async fn next_number(&self, queue_id: &str) -> Result<TokenReservation> {
        let hold = self.acquire(queue_id).await;

        let current = self.current_max(queue_id).await?;
        let number = current
            .checked_add(1)
            .ok_or_else(|| DomainError::TokenNumbersExhausted(queue_id.to_string()))?;

        debug!(queue_id = %queue_id, token_number = number, "Token number reserved");

        Ok(TokenReservation {
            queue_id: queue_id.to_string(),
            number,
            _hold: hold,
        })
    }

    /// Highest token number issued for a queue (0 when none).
    ///
    /// Unlocked read: the value may be stale by the time it is returned.
    pub async fn current_max(&self, queue_id: &str) -> Result<TokenNumber> {
        let latest = self.token_repo.scan(&TokenScan::latest(queue_id)).await?;
        Ok(latest.first().map(|t| t.token_number).unwrap_or(0))
    }

    /// Number of per-queue locks currently registered (always 0 for the global scope)
    pub fn tracked_locks(&self) -> usize {
        match &self.locks {
            Locks::Global(_) => 0,
            Locks::PerQueue(registry) => registry.len(),
        }
    }

    async fn acquire(&self, queue_id: &str) -> LockHold {
        match &self.locks {
            Locks::Global(lock) => LockHold {
                guard: Some(Arc::clone(lock).lock_owned().await),
                registry: None,
            },
            Locks::PerQueue(registry) => {
                // Shard guard is released at the end of this statement, before awaiting
                let lock = registry
                    .entry(queue_id.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .value()
                    .clone();

                LockHold {
                    guard: Some(lock.lock_owned().await),
                    registry: Some((Arc::clone(registry), queue_id.to_string())),
                }
            }
        }
    }
}

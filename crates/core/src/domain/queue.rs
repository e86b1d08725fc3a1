// Queue Domain Model

use crate::domain::Token;
use serde::{Deserialize, Serialize};

/// Queue identifier (store-assigned, opaque)
pub type QueueId = String;

/// Observable queue state. Deleted queues are absent from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueState {
    Active,
    Paused,
}

impl std::fmt::Display for QueueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueState::Active => write!(f, "ACTIVE"),
            QueueState::Paused => write!(f, "PAUSED"),
        }
    }
}

/// Queue Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    /// Empty until the store assigns one
    pub id: QueueId,
    pub name: String,
    pub is_paused: bool,
    pub created_at: i64, // epoch ms

    /// Ascending by token number; populated only on read
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl Queue {
    /// Create an unsaved, active queue
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `created_at` - Creation timestamp in epoch ms (injected, not system time)
    pub fn new(name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: QueueId::new(),
            name: name.into(),
            is_paused: false,
            created_at,
            tokens: Vec::new(),
        }
    }

    pub fn state(&self) -> QueueState {
        if self.is_paused {
            QueueState::Paused
        } else {
            QueueState::Active
        }
    }
}

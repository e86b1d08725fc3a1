// Token Domain Model

use crate::domain::QueueId;
use serde::{Deserialize, Serialize};

/// Token identifier (store-assigned, opaque)
pub type TokenId = String;

/// 1-based position within a queue, unique per queue
pub type TokenNumber = u32;

/// Token Entity (one enrollment in a queue)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub queue_id: QueueId,
    pub token_number: TokenNumber,

    // Holder details
    pub name: String,
    pub contact_number: Option<String>,
    pub email_id: Option<String>,

    pub created_at: i64, // epoch ms
}

impl Token {
    /// Create an unsaved token with no queue and no number.
    ///
    /// Queue id and number are assigned during enrollment.
    pub fn new(name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: TokenId::new(),
            queue_id: QueueId::new(),
            token_number: 0,
            name: name.into(),
            contact_number: None,
            email_id: None,
            created_at,
        }
    }
}

//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};

/// Request to create a queue
#[derive(Debug, Clone, Serialize)]
pub struct CreateQueueRequest {
    pub name: String,
}

/// Response from queue creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQueueResponse {
    pub queue_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct QueueIdRequest {
    pub queue_id: String,
}

/// A queue with its tokens in ascending token-number order
#[derive(Debug, Clone, Deserialize)]
pub struct QueueView {
    pub queue_id: String,
    pub name: String,
    /// `ACTIVE` or `PAUSED`
    pub state: String,
    pub is_paused: bool,
    pub created_at: i64,
    pub tokens: Vec<TokenView>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SetPausedRequest {
    pub queue_id: String,
    pub is_paused: bool,
}

/// Response from pausing or resuming a queue
#[derive(Debug, Clone, Deserialize)]
pub struct SetPausedResponse {
    pub queue_id: String,
    pub is_paused: bool,
}

/// Response from queue deletion
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteQueueResponse {
    pub queue_id: String,
    pub deleted: bool,
}

/// Request to join a queue
#[derive(Debug, Clone, Serialize)]
pub struct EnrollRequest {
    pub queue_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

impl EnrollRequest {
    pub fn new(queue_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            queue_id: queue_id.into(),
            name: name.into(),
            contact_number: None,
            email_id: None,
        }
    }

    pub fn contact_number(mut self, contact: impl Into<String>) -> Self {
        self.contact_number = Some(contact.into());
        self
    }

    pub fn email_id(mut self, email: impl Into<String>) -> Self {
        self.email_id = Some(email.into());
        self
    }
}

/// Response from enrollment
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollResponse {
    pub token_id: String,
    pub queue_id: String,
    pub token_number: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenIdRequest {
    pub token_id: String,
}

/// A token as stored
#[derive(Debug, Clone, Deserialize)]
pub struct TokenView {
    pub token_id: String,
    pub queue_id: String,
    pub token_number: u32,
    pub name: String,
    pub contact_number: Option<String>,
    pub email_id: Option<String>,
    pub created_at: i64,
}

/// Response from token removal (the daemon currently always errors)
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveTokenResponse {
    pub token_id: String,
    pub removed: bool,
}

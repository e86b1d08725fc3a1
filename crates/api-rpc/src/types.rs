//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use serde::{Deserialize, Serialize};
use simplq_core::domain::{Queue, Token};

/// queue.create.v1 - Create a queue
#[derive(Debug, Deserialize)]
pub struct CreateQueueRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQueueResponse {
    pub queue_id: String,
}

/// queue.get.v1 - Read a queue with its tokens
#[derive(Debug, Deserialize)]
pub struct GetQueueRequest {
    pub queue_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueView {
    pub queue_id: String,
    pub name: String,
    pub state: String,
    pub is_paused: bool,
    pub created_at: i64,
    pub tokens: Vec<TokenView>,
}

impl From<Queue> for QueueView {
    fn from(queue: Queue) -> Self {
        Self {
            state: queue.state().to_string(),
            queue_id: queue.id,
            name: queue.name,
            is_paused: queue.is_paused,
            created_at: queue.created_at,
            tokens: queue.tokens.into_iter().map(TokenView::from).collect(),
        }
    }
}

/// queue.pause.v1 - Set or clear the paused flag
#[derive(Debug, Deserialize)]
pub struct SetPausedRequest {
    pub queue_id: String,
    pub is_paused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPausedResponse {
    pub queue_id: String,
    pub is_paused: bool,
}

/// queue.delete.v1 - Delete a queue (tokens are kept)
#[derive(Debug, Deserialize)]
pub struct DeleteQueueRequest {
    pub queue_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteQueueResponse {
    pub queue_id: String,
    pub deleted: bool,
}

/// token.enroll.v1 - Join a queue
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub queue_id: String,
    pub name: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub token_id: String,
    pub queue_id: String,
    pub token_number: u32,
}

/// token.get.v1 - Read a token
#[derive(Debug, Deserialize)]
pub struct GetTokenRequest {
    pub token_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenView {
    pub token_id: String,
    pub queue_id: String,
    pub token_number: u32,
    pub name: String,
    pub contact_number: Option<String>,
    pub email_id: Option<String>,
    pub created_at: i64,
}

impl From<Token> for TokenView {
    fn from(token: Token) -> Self {
        Self {
            token_id: token.id,
            queue_id: token.queue_id,
            token_number: token.token_number,
            name: token.name,
            contact_number: token.contact_number,
            email_id: token.email_id,
            created_at: token.created_at,
        }
    }
}

/// token.remove.v1 - Leave a queue (not supported, always errors)
#[derive(Debug, Deserialize)]
pub struct RemoveTokenRequest {
    pub token_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTokenResponse {
    pub token_id: String,
    pub removed: bool,
}

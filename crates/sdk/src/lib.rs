//! SimplQ SDK - Rust Client Library
//!
//! Typed client for the SimplQ daemon's JSON-RPC API.
//!
//! # Example
//!
//! ```no_run
//! use simplq_sdk::{EnrollRequest, SimplqClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SimplqClient::connect("http://127.0.0.1:9640").await?;
//!
//!     let queue = client.create_queue("bakery").await?;
//!     let token = client
//!         .enroll(EnrollRequest::new(&queue.queue_id, "Ada"))
//!         .await?;
//!
//!     println!("Token #{} in queue {}", token.token_number, queue.queue_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::SimplqClient;
pub use error::{code, Result, SdkError};
pub use types::{
    CreateQueueRequest, CreateQueueResponse, DeleteQueueResponse, EnrollRequest, EnrollResponse,
    QueueView, RemoveTokenResponse, SetPausedResponse, TokenView,
};

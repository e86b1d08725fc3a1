//! JSON-RPC API Layer
//!
//! Exposes the queue and token operations of `QueueService` as
//! versioned JSON-RPC 2.0 methods.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
pub use jsonrpsee::server::ServerHandle;

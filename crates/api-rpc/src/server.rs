//! JSON-RPC Server
//!
//! Serves the queue and token methods over JSON-RPC 2.0 (HTTP/TCP).

use crate::handler::RpcHandler;
use crate::types::{
    CreateQueueRequest, DeleteQueueRequest, EnrollRequest, GetQueueRequest, GetTokenRequest,
    RemoveTokenRequest, SetPausedRequest,
};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use serde::de::DeserializeOwned;
use simplq_core::application::QueueService;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9640;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// Accept both `{"name": ..}` and `[{"name": ..}]` parameter shapes
fn parse_params<T: DeserializeOwned>(params: &Params<'_>) -> Result<T, ErrorObjectOwned> {
    if params.is_object() {
        params.parse()
    } else {
        params.one()
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<QueueService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address alongside the handle used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let mut module = RpcModule::new(());

        // Queue methods
        let handler = self.handler.clone();
        module
            .register_async_method("queue.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateQueueRequest = parse_params(&params)?;
                    handler.create_queue(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetQueueRequest = parse_params(&params)?;
                    handler.get_queue(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.pause.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: SetPausedRequest = parse_params(&params)?;
                    handler.set_paused(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("queue.delete.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: DeleteQueueRequest = parse_params(&params)?;
                    handler.delete_queue(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // Token methods
        let handler = self.handler.clone();
        module
            .register_async_method("token.enroll.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: EnrollRequest = parse_params(&params)?;
                    handler.enroll(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("token.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetTokenRequest = parse_params(&params)?;
                    handler.get_token(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("token.remove.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: RemoveTokenRequest = parse_params(&params)?;
                    handler.remove_token(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        info!(addr = %local_addr, "JSON-RPC server started");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

//! RPC Method Handlers
//!
//! Translates JSON-RPC parameters into `QueueService` calls.

use crate::error::to_rpc_error;
use crate::types::{
    CreateQueueRequest, CreateQueueResponse, DeleteQueueRequest, DeleteQueueResponse,
    EnrollRequest, EnrollResponse, GetQueueRequest, GetTokenRequest, QueueView,
    RemoveTokenRequest, RemoveTokenResponse, SetPausedRequest, SetPausedResponse, TokenView,
};
use jsonrpsee::types::ErrorObjectOwned;
use simplq_core::application::{queue_service, QueueService};
use std::sync::Arc;
use tracing::debug;

/// RPC Handler with injected service
pub struct RpcHandler {
    service: Arc<QueueService>,
}

impl RpcHandler {
    pub fn new(service: Arc<QueueService>) -> Self {
        Self { service }
    }

    /// queue.create.v1
    pub async fn create_queue(
        &self,
        params: CreateQueueRequest,
    ) -> Result<CreateQueueResponse, ErrorObjectOwned> {
        let queue_id = self
            .service
            .create_queue(queue_service::CreateQueueRequest::new(params.name))
            .await
            .map_err(to_rpc_error)?;

        Ok(CreateQueueResponse { queue_id })
    }

    /// queue.get.v1
    pub async fn get_queue(&self, params: GetQueueRequest) -> Result<QueueView, ErrorObjectOwned> {
        let queue = self
            .service
            .read_queue(&params.queue_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(QueueView::from(queue))
    }

    /// queue.pause.v1
    pub async fn set_paused(
        &self,
        params: SetPausedRequest,
    ) -> Result<SetPausedResponse, ErrorObjectOwned> {
        self.service
            .set_paused(&params.queue_id, params.is_paused)
            .await
            .map_err(to_rpc_error)?;

        Ok(SetPausedResponse {
            queue_id: params.queue_id,
            is_paused: params.is_paused,
        })
    }

    /// queue.delete.v1
    pub async fn delete_queue(
        &self,
        params: DeleteQueueRequest,
    ) -> Result<DeleteQueueResponse, ErrorObjectOwned> {
        self.service
            .delete_queue(&params.queue_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DeleteQueueResponse {
            queue_id: params.queue_id,
            deleted: true,
        })
    }

    /// token.enroll.v1
    pub async fn enroll(&self, params: EnrollRequest) -> Result<EnrollResponse, ErrorObjectOwned> {
        let req = queue_service::EnrollRequest {
            name: params.name,
            contact_number: params.contact_number,
            email_id: params.email_id,
        };

        let token = self
            .service
            .enroll_token_detailed(&params.queue_id, req)
            .await
            .map_err(to_rpc_error)?;

        Ok(EnrollResponse {
            token_id: token.id,
            queue_id: token.queue_id,
            token_number: token.token_number,
        })
    }

    /// token.get.v1
    pub async fn get_token(&self, params: GetTokenRequest) -> Result<TokenView, ErrorObjectOwned> {
        let token = self
            .service
            .read_token(&params.token_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(TokenView::from(token))
    }

    /// token.remove.v1
    pub async fn remove_token(
        &self,
        params: RemoveTokenRequest,
    ) -> Result<RemoveTokenResponse, ErrorObjectOwned> {
        debug!(token_id = %params.token_id, "Token removal requested");

        self.service
            .remove_token(&params.token_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(RemoveTokenResponse {
            token_id: params.token_id,
            removed: true,
        })
    }
}

//! SimplQ Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    CreateQueueRequest, CreateQueueResponse, DeleteQueueResponse, EnrollRequest, EnrollResponse,
    QueueIdRequest, QueueView, RemoveTokenResponse, SetPausedRequest, SetPausedResponse,
    TokenIdRequest, TokenView,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

/// SimplQ daemon client
///
/// # Example
///
/// ```no_run
/// use simplq_sdk::SimplqClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SimplqClient::connect("http://127.0.0.1:9640").await?;
/// let queue = client.create_queue("bakery").await?;
/// # Ok(())
/// # }
/// ```
pub struct SimplqClient {
    client: HttpClient,
}

impl SimplqClient {
    /// Connect to the daemon
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9640`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a queue and return its id
    pub async fn create_queue(&self, name: impl Into<String>) -> Result<CreateQueueResponse> {
        let request = CreateQueueRequest { name: name.into() };
        let response = self
            .client
            .request("queue.create.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Read a queue with its tokens
    pub async fn get_queue(&self, queue_id: impl Into<String>) -> Result<QueueView> {
        let request = QueueIdRequest {
            queue_id: queue_id.into(),
        };
        let response = self
            .client
            .request("queue.get.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Pause (`true`) or resume (`false`) a queue
    pub async fn set_paused(
        &self,
        queue_id: impl Into<String>,
        is_paused: bool,
    ) -> Result<SetPausedResponse> {
        let request = SetPausedRequest {
            queue_id: queue_id.into(),
            is_paused,
        };
        let response = self
            .client
            .request("queue.pause.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Delete a queue. Its tokens stay readable by id.
    pub async fn delete_queue(&self, queue_id: impl Into<String>) -> Result<DeleteQueueResponse> {
        let request = QueueIdRequest {
            queue_id: queue_id.into(),
        };
        let response = self
            .client
            .request("queue.delete.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Join a queue
    ///
    /// ```no_run
    /// # use simplq_sdk::{EnrollRequest, SimplqClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = SimplqClient::connect("http://127.0.0.1:9640").await?;
    /// let token = client
    ///     .enroll(EnrollRequest::new("queue-id", "Ada").contact_number("+44 20 7946 0000"))
    ///     .await?;
    /// println!("Your number is {}", token.token_number);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn enroll(&self, request: EnrollRequest) -> Result<EnrollResponse> {
        let response = self
            .client
            .request("token.enroll.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Read a token
    pub async fn get_token(&self, token_id: impl Into<String>) -> Result<TokenView> {
        let request = TokenIdRequest {
            token_id: token_id.into(),
        };
        let response = self
            .client
            .request("token.get.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Leave a queue. Not supported by the daemon yet; returns an
    /// `SdkError::Rpc` with code 5004.
    pub async fn remove_token(&self, token_id: impl Into<String>) -> Result<RemoveTokenResponse> {
        let request = TokenIdRequest {
            token_id: token_id.into(),
        };
        let response = self
            .client
            .request("token.remove.v1", rpc_params![request])
            .await?;

        Ok(response)
    }
}

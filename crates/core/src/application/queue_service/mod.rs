// Queue Service - Queue and token lifecycle use cases

pub mod enroll;
pub mod request;

pub use request::{CreateQueueRequest, EnrollRequest};

use crate::application::sequencer::TokenSequencer;
use crate::domain::{Queue, QueueId, Token, TokenId};
use crate::error::{AppError, Result};
use crate::port::{QueueChanges, QueueRepository, TimeProvider, TokenRepository, TokenScan};
use std::sync::Arc;
use tracing::{debug, info};

/// Queue Service
pub struct QueueService {
    queue_repo: Arc<dyn QueueRepository>,
    token_repo: Arc<dyn TokenRepository>,
    sequencer: Arc<TokenSequencer>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueService {
    pub fn new(
        queue_repo: Arc<dyn QueueRepository>,
        token_repo: Arc<dyn TokenRepository>,
        sequencer: Arc<TokenSequencer>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            queue_repo,
            token_repo,
            sequencer,
            time_provider,
        }
    }

    /// Create a queue, returning the store-assigned id
    pub async fn create_queue(&self, req: CreateQueueRequest) -> Result<QueueId> {
        req.validate()?;

        let queue = Queue::new(req.name, self.time_provider.now_millis());
        let id = self.queue_repo.insert(&queue).await?;

        info!(queue_id = %id, name = %queue.name, "Queue created");
        Ok(id)
    }

    /// Read a queue with its tokens in ascending token-number order
    pub async fn read_queue(&self, id: &str) -> Result<Queue> {
        let mut queue = self
            .queue_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Queue {} not found", id)))?;

        queue.tokens = self
            .token_repo
            .scan(&TokenScan::all_ascending(queue.id.as_str()))
            .await?;

        debug!(queue_id = %queue.id, tokens = queue.tokens.len(), "Queue read");
        Ok(queue)
    }

    /// Set the paused flag (only that attribute is written)
    pub async fn set_paused(&self, id: &str, is_paused: bool) -> Result<()> {
        let matched = self
            .queue_repo
            .update(id, &QueueChanges::paused(is_paused))
            .await?;

        if matched == 0 {
            return Err(AppError::NotFound(format!("Queue {} not found", id)));
        }

        info!(queue_id = %id, is_paused, "Queue pause flag updated");
        Ok(())
    }

    /// Delete the queue record. Its tokens are left in place.
    pub async fn delete_queue(&self, id: &str) -> Result<()> {
        let deleted = self.queue_repo.delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!("Queue {} not found", id)));
        }

        info!(queue_id = %id, "Queue deleted (tokens retained)");
        Ok(())
    }

    /// Enroll into a queue, returning the new token id
    pub async fn enroll_token(&self, queue_id: &str, req: EnrollRequest) -> Result<TokenId> {
        self.enroll_token_detailed(queue_id, req)
            .await
            .map(|token| token.id)
    }

    /// Enroll into a queue, returning the persisted token (with its number)
    pub async fn enroll_token_detailed(&self, queue_id: &str, req: EnrollRequest) -> Result<Token> {
        enroll::execute(
            self.token_repo.as_ref(),
            self.sequencer.as_ref(),
            self.time_provider.as_ref(),
            queue_id,
            req,
        )
        .await
    }

    pub async fn read_token(&self, id: &str) -> Result<Token> {
        self.token_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Token {} not found", id)))
    }

    /// Token removal is not supported; always fails with `Unimplemented`
    pub async fn remove_token(&self, id: &str) -> Result<()> {
        Err(AppError::Unimplemented(format!(
            "removing tokens is not supported (token {})",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sequencer::LockScope;
    use crate::domain::DomainError;
    use crate::port::queue_repository::MockQueueRepository;
    use crate::port::time_provider::FixedTimeProvider;
    use crate::port::token_repository::MockTokenRepository;
    use crate::port::SortOrder;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    const NOW: i64 = 1_700_000_000_000;

    fn service(queues: MockQueueRepository, tokens: MockTokenRepository) -> QueueService {
        let token_repo: Arc<dyn TokenRepository> = Arc::new(tokens);
        let sequencer = Arc::new(TokenSequencer::new(token_repo.clone(), LockScope::Global));
        QueueService::new(
            Arc::new(queues),
            token_repo,
            sequencer,
            Arc::new(FixedTimeProvider(NOW)),
        )
    }

    fn stored_queue(id: &str) -> Queue {
        let mut queue = Queue::new("front desk", NOW);
        queue.id = id.to_string();
        queue
    }

    fn stored_token(queue_id: &str, number: u32) -> Token {
        let mut token = Token::new(format!("holder {}", number), NOW);
        token.id = format!("tok-{}", number);
        token.queue_id = queue_id.to_string();
        token.token_number = number;
        token
    }

    #[tokio::test]
    async fn test_create_queue_returns_store_id() {
        let mut queues = MockQueueRepository::new();
        queues
            .expect_insert()
            .withf(|q| q.id.is_empty() && q.name == "front desk" && !q.is_paused && q.created_at == NOW)
            .times(1)
            .returning(|_| Ok("q-1".to_string()));

        let service = service(queues, MockTokenRepository::new());

        let id = service
            .create_queue(CreateQueueRequest::new("front desk"))
            .await
            .unwrap();
        assert_eq!(id, "q-1");
    }

    #[tokio::test]
    async fn test_create_queue_rejects_invalid_name_before_store() {
        // No expectations: any store call panics
        let service = service(MockQueueRepository::new(), MockTokenRepository::new());

        let err = service
            .create_queue(CreateQueueRequest::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidQueueName(_))));
    }

    #[tokio::test]
    async fn test_read_queue_attaches_tokens_ascending() {
        let mut queues = MockQueueRepository::new();
        queues
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_queue(id))));

        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_scan()
            .withf(|scan| {
                scan.queue_id == "q-1" && scan.order == SortOrder::Ascending && scan.limit.is_none()
            })
            .times(1)
            .returning(|scan| Ok((1..=3).map(|n| stored_token(&scan.queue_id, n)).collect()));

        let service = service(queues, tokens);

        let queue = service.read_queue("q-1").await.unwrap();
        let numbers: Vec<u32> = queue.tokens.iter().map(|t| t.token_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_read_missing_queue_skips_token_scan() {
        let mut queues = MockQueueRepository::new();
        queues.expect_find_by_id().returning(|_| Ok(None));

        let mut tokens = MockTokenRepository::new();
        tokens.expect_scan().times(0);

        let service = service(queues, tokens);

        let err = service.read_queue("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_set_paused_not_found_when_nothing_matched() {
        let mut queues = MockQueueRepository::new();
        queues
            .expect_update()
            .withf(|_, changes| changes.is_paused == Some(true))
            .returning(|_, _| Ok(0));

        let service = service(queues, MockTokenRepository::new());

        let err = service.set_paused("missing", true).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_set_paused_ok() {
        let mut queues = MockQueueRepository::new();
        queues.expect_update().times(1).returning(|_, _| Ok(1));

        let service = service(queues, MockTokenRepository::new());
        assert_ok!(service.set_paused("q-1", false).await);
    }

    #[tokio::test]
    async fn test_delete_queue_not_found() {
        let mut queues = MockQueueRepository::new();
        queues.expect_delete().returning(|_| Ok(0));

        let service = service(queues, MockTokenRepository::new());

        let err = service.delete_queue("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_queue_does_not_touch_tokens() {
        let mut queues = MockQueueRepository::new();
        queues.expect_delete().times(1).returning(|_| Ok(1));

        // No token expectations: a cascading delete would panic
        let service = service(queues, MockTokenRepository::new());
        assert_ok!(service.delete_queue("q-1").await);
    }

    #[tokio::test]
    async fn test_enroll_assigns_queue_and_next_number() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_scan()
            .returning(|scan| Ok(vec![stored_token(&scan.queue_id, 7)]));
        tokens
            .expect_insert()
            .withf(|t| {
                t.id.is_empty() && t.queue_id == "q-1" && t.token_number == 8 && t.created_at == NOW
            })
            .times(1)
            .returning(|_| Ok("tok-8".to_string()));

        let service = service(MockQueueRepository::new(), tokens);

        let mut req = EnrollRequest::new("Ada");
        req.contact_number = Some("+1 555-0100".to_string());
        let token = service.enroll_token_detailed("q-1", req).await.unwrap();

        assert_eq!(token.id, "tok-8");
        assert_eq!(token.token_number, 8);
        assert_eq!(token.contact_number.as_deref(), Some("+1 555-0100"));
    }

    #[tokio::test]
    async fn test_enroll_does_not_check_queue_exists() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_scan().returning(|_| Ok(vec![]));
        tokens
            .expect_insert()
            .returning(|_| Ok("tok-1".to_string()));

        // Queue repository has no expectations: enrollment never looks the queue up
        let service = service(MockQueueRepository::new(), tokens);

        let id = service
            .enroll_token("no-such-queue", EnrollRequest::new("Ada"))
            .await
            .unwrap();
        assert_eq!(id, "tok-1");
    }

    #[tokio::test]
    async fn test_enroll_aborts_when_max_read_fails() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_scan()
            .returning(|_| Err(AppError::Unavailable("connection refused".to_string())));
        tokens.expect_insert().times(0);

        let service = service(MockQueueRepository::new(), tokens);

        let result = service.enroll_token("q-1", EnrollRequest::new("Ada")).await;
        assert!(matches!(assert_err!(result), AppError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_enroll_insert_failure_releases_lock() {
        let inserts = AtomicUsize::new(0);
        let mut tokens = MockTokenRepository::new();
        tokens.expect_scan().returning(|_| Ok(vec![]));
        tokens.expect_insert().returning(move |_| {
            if inserts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::Unavailable("disk full".to_string()))
            } else {
                Ok("tok-1".to_string())
            }
        });

        let service = service(MockQueueRepository::new(), tokens);

        assert_err!(service.enroll_token("q-1", EnrollRequest::new("Ada")).await);

        let second = tokio::time::timeout(
            Duration::from_secs(1),
            service.enroll_token_detailed("q-1", EnrollRequest::new("Grace")),
        )
        .await
        .expect("lock was not released after insert failure")
        .unwrap();

        // Nothing was persisted by the failed attempt, so the number is reused
        assert_eq!(second.token_number, 1);
    }

    #[tokio::test]
    async fn test_enroll_validates_holder_before_locking() {
        let service = service(MockQueueRepository::new(), MockTokenRepository::new());

        let err = service
            .enroll_token("q-1", EnrollRequest::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidHolderName(_))));
    }

    #[tokio::test]
    async fn test_read_token_not_found() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_find_by_id().returning(|_| Ok(None));

        let service = service(MockQueueRepository::new(), tokens);

        let err = service.read_token("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remove_token_is_unimplemented() {
        // No expectations: removal must not reach the store
        let service = service(MockQueueRepository::new(), MockTokenRepository::new());

        let err = service.remove_token("tok-1").await.unwrap_err();
        assert!(matches!(err, AppError::Unimplemented(_)));
    }
}

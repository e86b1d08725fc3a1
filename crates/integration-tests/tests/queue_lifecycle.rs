//! Queue and token lifecycle against an on-disk SQLite store

mod common;

use common::TestDb;
use simplq_core::application::{CreateQueueRequest, EnrollRequest, LockScope};
use simplq_core::domain::{QueueState, Token};
use simplq_core::error::AppError;
use simplq_core::port::id_provider::UuidProvider;
use simplq_core::port::IdProvider;
use simplq_infra_sqlite::{create_pool, run_migrations};

#[tokio::test]
async fn test_fresh_queue_has_no_tokens() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let id = service
        .create_queue(CreateQueueRequest::new("post office"))
        .await
        .unwrap();

    let queue = service.read_queue(&id).await.unwrap();
    assert_eq!(queue.id, id);
    assert_eq!(queue.name, "post office");
    assert_eq!(queue.state(), QueueState::Active);
    assert!(queue.tokens.is_empty());
}

#[tokio::test]
async fn test_tokens_read_back_in_number_order() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);
    let token_repo = db.token_repo();

    let queue_id = service
        .create_queue(CreateQueueRequest::new("pharmacy"))
        .await
        .unwrap();

    // Stored out of order on purpose
    for number in [3, 1, 2] {
        let mut token = Token::new(format!("holder {}", number), 1_000);
        token.queue_id = queue_id.clone();
        token.token_number = number;
        token_repo.insert(&token).await.unwrap();
    }

    let queue = service.read_queue(&queue_id).await.unwrap();
    let numbers: Vec<_> = queue.tokens.iter().map(|t| t.token_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    // The next enrollment continues after the stored maximum
    let token = service
        .enroll_token_detailed(&queue_id, EnrollRequest::new("late arrival"))
        .await
        .unwrap();
    assert_eq!(token.token_number, 4);
}

#[tokio::test]
async fn test_pause_and_resume() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let id = service
        .create_queue(CreateQueueRequest::new("clinic"))
        .await
        .unwrap();

    service.set_paused(&id, true).await.unwrap();
    let queue = service.read_queue(&id).await.unwrap();
    assert!(queue.is_paused);
    assert_eq!(queue.state(), QueueState::Paused);
    assert_eq!(queue.name, "clinic");

    // Pausing twice still matches the record
    service.set_paused(&id, true).await.unwrap();

    service.set_paused(&id, false).await.unwrap();
    let queue = service.read_queue(&id).await.unwrap();
    assert_eq!(queue.state(), QueueState::Active);
}

#[tokio::test]
async fn test_paused_queue_still_enrolls() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let id = service
        .create_queue(CreateQueueRequest::new("clinic"))
        .await
        .unwrap();
    service.set_paused(&id, true).await.unwrap();

    let token = service
        .enroll_token_detailed(&id, EnrollRequest::new("Ada"))
        .await
        .unwrap();
    assert_eq!(token.token_number, 1);
}

#[tokio::test]
async fn test_missing_queue_not_found() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);
    let missing = UuidProvider.generate_id();

    let err = service.set_paused(&missing, true).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.read_queue(&missing).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.delete_queue(&missing).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.read_token(&missing).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_keeps_tokens_readable() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let queue_id = service
        .create_queue(CreateQueueRequest::new("bakery"))
        .await
        .unwrap();
    let token_id = service
        .enroll_token(&queue_id, EnrollRequest::new("Grace"))
        .await
        .unwrap();

    service.delete_queue(&queue_id).await.unwrap();

    let err = service.read_queue(&queue_id).await.unwrap_err();
    assert!(err.is_not_found());

    let token = service.read_token(&token_id).await.unwrap();
    assert_eq!(token.queue_id, queue_id);
    assert_eq!(token.token_number, 1);

    // Second delete has nothing left to match
    let err = service.delete_queue(&queue_id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_enroll_into_nonexistent_queue_succeeds() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);
    let orphan_queue = UuidProvider.generate_id();

    let first = service
        .enroll_token_detailed(&orphan_queue, EnrollRequest::new("Ada"))
        .await
        .unwrap();
    let second = service
        .enroll_token_detailed(&orphan_queue, EnrollRequest::new("Grace"))
        .await
        .unwrap();

    assert_eq!(first.token_number, 1);
    assert_eq!(second.token_number, 2);
    assert!(service.read_queue(&orphan_queue).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_enroll_stores_holder_details() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);
    let queue_id = service
        .create_queue(CreateQueueRequest::new("clinic"))
        .await
        .unwrap();

    let mut req = EnrollRequest::new("Ada Lovelace");
    req.contact_number = Some("+44 20 7946 0000".to_string());
    req.email_id = Some("ada@example.com".to_string());

    let token_id = service.enroll_token(&queue_id, req).await.unwrap();
    let token = service.read_token(&token_id).await.unwrap();

    assert_eq!(token.id, token_id);
    assert_eq!(token.name, "Ada Lovelace");
    assert_eq!(token.contact_number.as_deref(), Some("+44 20 7946 0000"));
    assert_eq!(token.email_id.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_invalid_requests_rejected_before_store() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let err = service
        .create_queue(CreateQueueRequest::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));

    let queue_id = service
        .create_queue(CreateQueueRequest::new("clinic"))
        .await
        .unwrap();

    let mut req = EnrollRequest::new("Ada");
    req.email_id = Some("not-an-email".to_string());
    let err = service.enroll_token(&queue_id, req).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));

    // Nothing was written, so the next number is still 1
    let token = service
        .enroll_token_detailed(&queue_id, EnrollRequest::new("Ada"))
        .await
        .unwrap();
    assert_eq!(token.token_number, 1);
}

#[tokio::test]
async fn test_remove_token_unimplemented() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let token_id = service
        .enroll_token(&UuidProvider.generate_id(), EnrollRequest::new("Ada"))
        .await
        .unwrap();

    let err = service.remove_token(&token_id).await.unwrap_err();
    assert!(matches!(err, AppError::Unimplemented(_)));

    // Still there
    assert!(service.read_token(&token_id).await.is_ok());
}

#[tokio::test]
async fn test_malformed_ids_invalid_argument() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let err = service.read_queue("not-a-uuid").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    let err = service.read_token("42").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    let err = service
        .enroll_token("queue-1", EnrollRequest::new("Ada"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_non_canonical_queue_id_rejected() {
    let db = TestDb::new().await;
    let service = db.service(LockScope::Global);

    let queue_id = service
        .create_queue(CreateQueueRequest::new("clinic"))
        .await
        .unwrap();
    service
        .enroll_token(&queue_id, EnrollRequest::new("Ada"))
        .await
        .unwrap();

    for spelling in [
        queue_id.to_uppercase(),
        format!("{{{}}}", queue_id),
        queue_id.replace('-', ""),
    ] {
        let err = service
            .enroll_token(&spelling, EnrollRequest::new("Grace"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)), "{}", spelling);

        let err = service.read_queue(&spelling).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)), "{}", spelling);
    }

    // The canonical spelling keeps its own single run
    let queue = service.read_queue(&queue_id).await.unwrap();
    assert_eq!(queue.tokens.len(), 1);
    let token = service
        .enroll_token_detailed(&queue_id, EnrollRequest::new("Grace"))
        .await
        .unwrap();
    assert_eq!(token.token_number, 2);
}

#[tokio::test]
async fn test_numbers_survive_reopen() {
    let db = TestDb::new().await;
    let queue_id = {
        let service = db.service(LockScope::Global);
        let queue_id = service
            .create_queue(CreateQueueRequest::new("town hall"))
            .await
            .unwrap();
        for name in ["a", "b"] {
            service
                .enroll_token(&queue_id, EnrollRequest::new(name))
                .await
                .unwrap();
        }
        queue_id
    };
    db.pool.close().await;

    // Fresh pool over the same file; migrations are idempotent
    let pool = create_pool(&db.url, 2).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let reopened = common::service_over(pool);

    let queue = reopened.read_queue(&queue_id).await.unwrap();
    assert_eq!(queue.tokens.len(), 2);

    let token = reopened
        .enroll_token_detailed(&queue_id, EnrollRequest::new("c"))
        .await
        .unwrap();
    assert_eq!(token.token_number, 3);
}

//! Shared wiring for the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use simplq_core::application::{LockScope, QueueService, TokenSequencer};
use simplq_core::port::id_provider::UuidProvider;
use simplq_core::port::time_provider::SystemTimeProvider;
use simplq_core::port::{QueueRepository, TokenRepository};
use simplq_infra_sqlite::{
    create_pool, run_migrations, SqliteQueueRepository, SqliteTokenRepository,
};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// On-disk database in a temporary directory, removed on drop
pub struct TestDb {
    pub pool: SqlitePool,
    pub url: String,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("simplq.db").display());

        let pool = create_pool(&url, 10).await.unwrap();
        run_migrations(&pool).await.unwrap();

        Self {
            pool,
            url,
            _dir: dir,
        }
    }

    pub fn queue_repo(&self) -> Arc<dyn QueueRepository> {
        Arc::new(SqliteQueueRepository::new(
            self.pool.clone(),
            Arc::new(UuidProvider),
        ))
    }

    pub fn token_repo(&self) -> Arc<dyn TokenRepository> {
        Arc::new(SqliteTokenRepository::new(
            self.pool.clone(),
            Arc::new(UuidProvider),
        ))
    }

    pub fn service(&self, scope: LockScope) -> QueueService {
        self.service_with_tokens(self.token_repo(), scope)
    }

    /// Service over a custom token repository (e.g. a fault-injecting wrapper)
    pub fn service_with_tokens(
        &self,
        token_repo: Arc<dyn TokenRepository>,
        scope: LockScope,
    ) -> QueueService {
        QueueService::new(
            self.queue_repo(),
            token_repo.clone(),
            Arc::new(TokenSequencer::new(token_repo, scope)),
            Arc::new(SystemTimeProvider),
        )
    }
}

/// Global-lock service over an existing pool
pub fn service_over(pool: SqlitePool) -> QueueService {
    let token_repo: Arc<dyn TokenRepository> = Arc::new(SqliteTokenRepository::new(
        pool.clone(),
        Arc::new(UuidProvider),
    ));
    QueueService::new(
        Arc::new(SqliteQueueRepository::new(pool, Arc::new(UuidProvider))),
        token_repo.clone(),
        Arc::new(TokenSequencer::new(token_repo, LockScope::Global)),
        Arc::new(SystemTimeProvider),
    )
}

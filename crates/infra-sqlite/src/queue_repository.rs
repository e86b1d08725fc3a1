// SQLite QueueRepository Implementation

use crate::error::{check_id, map_sqlx_error};
use async_trait::async_trait;
use simplq_core::domain::{Queue, QueueId};
use simplq_core::error::{AppError, Result};
use simplq_core::port::{IdProvider, QueueChanges, QueueRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteQueueRepository {
    pool: SqlitePool,
    id_provider: Arc<dyn IdProvider>,
}

impl SqliteQueueRepository {
    pub fn new(pool: SqlitePool, id_provider: Arc<dyn IdProvider>) -> Self {
        Self { pool, id_provider }
    }
}

#[async_trait]
impl QueueRepository for SqliteQueueRepository {
    async fn insert(&self, queue: &Queue) -> Result<QueueId> {
        // Caller-supplied ids are ignored
        let id = self.id_provider.generate_id();

        sqlx::query(
            r#"
            INSERT INTO queues (id, name, is_paused, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&queue.name)
        .bind(i64::from(queue.is_paused))
        .bind(queue.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Queue>> {
        check_id(self.id_provider.as_ref(), "queue", id)?;

        let row = sqlx::query_as::<_, QueueRow>("SELECT * FROM queues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(QueueRow::into_queue))
    }

    async fn update(&self, id: &str, changes: &QueueChanges) -> Result<u64> {
        check_id(self.id_provider.as_ref(), "queue", id)?;

        let Some(is_paused) = changes.is_paused else {
            return Err(AppError::InvalidArgument(format!(
                "No changes given for queue {}",
                id
            )));
        };

        // rows_affected counts matched rows, so re-applying the same flag reports 1
        let result = sqlx::query("UPDATE queues SET is_paused = ? WHERE id = ?")
            .bind(i64::from(is_paused))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        check_id(self.id_provider.as_ref(), "queue", id)?;

        let result = sqlx::query("DELETE FROM queues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct QueueRow {
    id: String,
    name: String,
    is_paused: i64, // SQLite boolean as integer
    created_at: i64,
}

impl QueueRow {
    fn into_queue(self) -> Queue {
        Queue {
            id: self.id,
            name: self.name,
            is_paused: self.is_paused != 0,
            created_at: self.created_at,
            tokens: Vec::new(),
        }
    }
}

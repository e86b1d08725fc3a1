// SQLite TokenRepository Implementation

use crate::error::{check_id, map_sqlx_error};
use async_trait::async_trait;
use simplq_core::domain::{Token, TokenId, TokenNumber};
use simplq_core::error::{AppError, Result};
use simplq_core::port::{IdProvider, SortOrder, TokenRepository, TokenScan};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteTokenRepository {
    pool: SqlitePool,
    id_provider: Arc<dyn IdProvider>,
}

impl SqliteTokenRepository {
    pub fn new(pool: SqlitePool, id_provider: Arc<dyn IdProvider>) -> Self {
        Self { pool, id_provider }
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn insert(&self, token: &Token) -> Result<TokenId> {
        check_id(self.id_provider.as_ref(), "queue", &token.queue_id)?;

        // Caller-supplied ids are ignored
        let id = self.id_provider.generate_id();

        sqlx::query(
            r#"
            INSERT INTO tokens (
                id, queue_id, token_number,
                name, contact_number, email_id,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&token.queue_id)
        .bind(i64::from(token.token_number))
        .bind(&token.name)
        .bind(&token.contact_number)
        .bind(&token.email_id)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Token>> {
        check_id(self.id_provider.as_ref(), "token", id)?;

        let row = sqlx::query_as::<_, TokenRow>("SELECT * FROM tokens WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(TokenRow::into_token).transpose()
    }

    async fn scan(&self, scan: &TokenScan) -> Result<Vec<Token>> {
        check_id(self.id_provider.as_ref(), "queue", &scan.queue_id)?;

        let direction = match scan.order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };

        // Negative LIMIT means no limit in SQLite
        let sql = format!(
            "SELECT * FROM tokens WHERE queue_id = ? ORDER BY token_number {} LIMIT ?",
            direction
        );

        let rows: Vec<TokenRow> = sqlx::query_as(&sql)
            .bind(&scan.queue_id)
            .bind(scan.limit.map(i64::from).unwrap_or(-1))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(TokenRow::into_token).collect()
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct TokenRow {
    id: String,
    queue_id: String,
    token_number: i64,
    name: String,
    contact_number: Option<String>,
    email_id: Option<String>,
    created_at: i64,
}

impl TokenRow {
    fn into_token(self) -> Result<Token> {
        let token_number = TokenNumber::try_from(self.token_number).map_err(|_| {
            AppError::Unavailable(format!(
                "Token {} has out-of-range number {}",
                self.id, self.token_number
            ))
        })?;

        Ok(Token {
            id: self.id,
            queue_id: self.queue_id,
            token_number,
            name: self.name,
            contact_number: self.contact_number,
            email_id: self.email_id,
            created_at: self.created_at,
        })
    }
}

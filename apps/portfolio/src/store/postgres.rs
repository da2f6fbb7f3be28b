use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::message::NewMessage;
use crate::store::{MessageStore, StoreError};

/// Writes straight into the Postgres table behind the site.
///
/// Expects a table shaped like:
///
/// ```sql
/// CREATE TABLE messages (
///     id         BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     name       TEXT NOT NULL,
///     email      TEXT NOT NULL,
///     subject    TEXT NOT NULL,
///     message    TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    insert_sql: String,
    probe_sql: String,
}

impl PgStore {
    /// `table` must already be a plain identifier (checked by `Config`).
    pub fn new(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            insert_sql: insert_statement(table),
            probe_sql: format!("SELECT 1 FROM {table} LIMIT 1"),
        }
    }
}

fn insert_statement(table: &str) -> String {
    format!("INSERT INTO {table} (name, email, subject, message) VALUES ($1, $2, $3, $4)")
}

#[async_trait]
impl MessageStore for PgStore {
    async fn insert(&self, message: &NewMessage) -> Result<(), StoreError> {
        sqlx::query(&self.insert_sql)
            .bind(message.name())
            .bind(message.email())
            .bind(message.subject())
            .bind(message.message())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn probe(&self) -> Result<(), StoreError> {
        sqlx::query(&self.probe_sql).fetch_optional(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

//! SQLite backend: one `messages` table, one statement per operation.

use super::{validate_new_text, MessageStore, StoreError};
use crate::model::Message;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const MESSAGES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL
    )
"#;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` (a file path, `sqlite:` URL or `sqlite::memory:`), creating the file if missing.
    /// An in-memory database lives as long as its single pooled connection, so the pool is pinned to one.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let in_memory = is_memory_url(database_url);
        let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let mut pool_opts = SqlitePoolOptions::new();
        if in_memory {
            pool_opts = pool_opts
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            pool_opts = pool_opts.max_connections(max_connections.max(1));
        }
        let pool = pool_opts.connect_with(opts).await?;
        tracing::info!(database_url = %database_url, in_memory, "connected to sqlite");
        Ok(SqliteStore { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl MessageStore for SqliteStore {
    async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(MESSAGES_DDL).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Message>, StoreError> {
        let sql = "SELECT id, text FROM messages ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Message>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, text: &str) -> Result<Message, StoreError> {
        validate_new_text(text)?;
        let sql = "INSERT INTO messages (text) VALUES (?) RETURNING id, text";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Message>(sql)
            .bind(text)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Message, StoreError> {
        let sql = "SELECT id, text FROM messages WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Message>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, text: &str) -> Result<Message, StoreError> {
        let sql = "UPDATE messages SET text = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(Message::new(id, text))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = "DELETE FROM messages WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        let store = SqliteStore::connect("sqlite::memory:", 5).await.unwrap();
        store.init().await.unwrap();
        store
    }

    #[test]
    fn detects_memory_urls() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url(":memory:"));
        assert!(!is_memory_url("messages.db"));
        assert!(!is_memory_url("sqlite://data/messages.db"));
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let store = memory_store().await;
        store.create("kept").await.unwrap();
        store.init().await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![Message::new(1, "kept")]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = memory_store().await;
        let first = store.create("a").await.unwrap();
        let second = store.create("b").await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        store.delete(second.id).await.unwrap();
        let third = store.create("c").await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn empty_text_is_rejected_without_insert() {
        let store = memory_store().await;
        let err = store.create("").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = memory_store().await;
        assert!(matches!(store.update(7, "x").await, Err(StoreError::NotFound(7))));
        assert!(matches!(store.delete(7).await, Err(StoreError::NotFound(7))));
        assert!(matches!(store.get(7).await, Err(StoreError::NotFound(7))));
    }

    #[tokio::test]
    async fn update_allows_empty_text() {
        let store = memory_store().await;
        let m = store.create("before").await.unwrap();
        store.update(m.id, "").await.unwrap();
        assert_eq!(store.get(m.id).await.unwrap().text, "");
    }

    #[tokio::test]
    async fn file_database_persists_across_connections() {
        let dir = std::env::temp_dir().join(format!("messages-api-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("persist.db");
        let _ = std::fs::remove_file(&path);
        let url = path.to_string_lossy().to_string();

        let store = SqliteStore::connect(&url, 2).await.unwrap();
        store.init().await.unwrap();
        store.create("durable").await.unwrap();
        store.pool().close().await;

        let reopened = SqliteStore::connect(&url, 2).await.unwrap();
        reopened.init().await.unwrap();
        assert_eq!(reopened.get(1).await.unwrap().text, "durable");
        reopened.pool().close().await;
        let _ = std::fs::remove_dir_all(&dir);
    }
}

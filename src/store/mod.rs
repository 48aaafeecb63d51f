//! Message storage: a trait with SQLite and in-memory backends.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::config::{Config, StorageKind};
use crate::model::Message;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("message {0} not found")]
    NotFound(i64),
    #[error("{0}")]
    InvalidInput(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Storage for messages. Every operation is a single, non-transactional statement.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Create the schema if it does not exist. Idempotent.
    async fn init(&self) -> Result<(), StoreError>;

    /// All messages in ascending id order.
    async fn list(&self) -> Result<Vec<Message>, StoreError>;

    /// Insert a message with non-empty text; returns it with the assigned id.
    async fn create(&self, text: &str) -> Result<Message, StoreError>;

    async fn get(&self, id: i64) -> Result<Message, StoreError>;

    /// Replace the text of an existing message. `NotFound` when no row matches.
    async fn update(&self, id: i64, text: &str) -> Result<Message, StoreError>;

    /// Remove a message. `NotFound` when no row was affected.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Text must be non-empty when a message is created. Updates do not check it.
pub(crate) fn validate_new_text(text: &str) -> Result<(), StoreError> {
    if text.is_empty() {
        return Err(StoreError::InvalidInput("text cannot be empty".into()));
    }
    Ok(())
}

/// Open the configured backend and ensure its schema exists.
pub async fn open_store(config: &Config) -> Result<Arc<dyn MessageStore>, StoreError> {
    let store: Arc<dyn MessageStore> = match config.storage {
        StorageKind::Sqlite => {
            Arc::new(SqliteStore::connect(&config.database_url, config.max_connections).await?)
        }
        StorageKind::Memory => Arc::new(MemoryStore::new()),
    };
    store.init().await?;
    tracing::info!(storage = ?config.storage, "message store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_invalid() {
        assert!(matches!(validate_new_text(""), Err(StoreError::InvalidInput(_))));
        assert!(validate_new_text(" ").is_ok());
    }
}

//! Non-durable backend holding messages in a locked vector. Ids behave like AUTOINCREMENT.

use super::{validate_new_text, MessageStore, StoreError};
use crate::model::Message;
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    messages: Vec<Message>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.messages.clone())
    }

    async fn create(&self, text: &str) -> Result<Message, StoreError> {
        validate_new_text(text)?;
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.last_id += 1;
        let msg = Message::new(inner.last_id, text);
        inner.messages.push(msg.clone());
        Ok(msg)
    }

    async fn get(&self, id: i64) -> Result<Message, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, text: &str) -> Result<Message, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let msg = inner
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;
        msg.text = text.to_string();
        Ok(msg.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);
        if inner.messages.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(())
    }
}

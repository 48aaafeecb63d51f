//! Message resource and request payloads.

use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /hello`.
pub const HELLO_TEXT: &str = "Hello, JSON API!";

/// A stored message. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub text: String,
    pub id: i64,
}

impl Message {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            id,
        }
    }
}

/// Body of `POST /messages` and `PUT /messages/:id`. A client-sent `id` is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageInput {
    #[serde(default)]
    pub text: String,
}

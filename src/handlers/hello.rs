use crate::model::{Message, HELLO_TEXT};
use axum::Json;

/// GET /hello: static greeting, no storage access.
pub async fn hello() -> Json<Message> {
    Json(Message::new(0, HELLO_TEXT))
}

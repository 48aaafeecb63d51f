//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of a successful `DELETE /messages/:id`.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: String,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn deleted(id: i64) -> (StatusCode, Json<Confirmation>) {
    success_ok(Confirmation {
        message: format!("deleted id {}", id),
    })
}

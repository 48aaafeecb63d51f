//! Message resource routes. Unsupported methods on these paths answer 405.

use crate::handlers::{
    create, delete as delete_handler, hello, list, method_not_allowed, missing_id, read, update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn message_routes(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(hello).fallback(method_not_allowed))
        .route(
            "/messages",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/messages/",
            get(missing_id)
                .put(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/messages/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

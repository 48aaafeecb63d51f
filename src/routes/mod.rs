//! Route tables and the assembled application router.

pub mod common;
pub mod message;

pub use common::common_routes_with_ready;
pub use message::message_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application: message routes, operational routes, plain-text 404 fallback and body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(message_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(body_limit)))
}

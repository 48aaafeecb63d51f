//! Messages API: JSON CRUD service over a single `messages` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, StorageKind};
pub use error::{AppError, ConfigError};
pub use model::{Message, MessageInput};
pub use routes::{app, common_routes_with_ready, message_routes};
pub use state::AppState;
pub use store::{open_store, MemoryStore, MessageStore, SqliteStore, StoreError};

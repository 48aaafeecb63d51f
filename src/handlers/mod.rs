//! HTTP handlers for the message resource, the greeting and fallbacks.

pub mod fallback;
pub mod hello;
pub mod message;
pub use fallback::*;
pub use hello::*;
pub use message::*;

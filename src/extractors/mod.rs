//! Request extractors with plain-text rejections.

pub mod json;
pub use json::JsonBody;

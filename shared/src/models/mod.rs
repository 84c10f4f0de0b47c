//! Data models
//!
//! Shared between katta-server and the admin/storefront frontends (via API).
//! All ids are `i64` (snowflake-style, JS-safe). JSON field names are
//! camelCase to match the storefront wire contract.

pub mod product;
pub mod serde_helpers;

// Re-exports
pub use product::*;
pub use serde_helpers::{BoolInput, ImagesInput, NumberOrText};

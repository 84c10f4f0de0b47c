//! Catalog write path
//!
//! Validation and normalization between the loose wire DTOs and the
//! storage-layer payloads the repository accepts.

mod normalize;

pub use normalize::{NewProduct, ProductPatch, parse_images, validate_create, validate_update};

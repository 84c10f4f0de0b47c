//! Shared types for the Katta Interiors storefront
//!
//! Wire and data types used by both the catalog backend (`katta-server`)
//! and the typed client (`katta-client`): the product model, the catalog
//! query/page/meta shapes, and id/time utilities.

pub mod catalog;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{CatalogMeta, CategoryFacet, PriceBounds, ProductPage, ProductQuery};
pub use models::{Category, Product, ProductCreate, ProductUpdate};

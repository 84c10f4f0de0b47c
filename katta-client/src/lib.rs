//! Typed client for the Katta Interiors catalog API
//!
//! Two halves:
//! - [`CatalogClient`]: reqwest-backed HTTP client for the catalog and
//!   admin endpoints.
//! - [`shop`]: the shop page's filter state machine with pending vs.
//!   applied selections, pagination, and the latest-wins guard that
//!   discards stale responses.

pub mod catalog;
pub mod error;
pub mod shop;

pub use catalog::{CatalogClient, LoginResponse, UploadResponse};
pub use error::{ClientError, ClientResult};
pub use shop::{AppliedFilters, FilterSelection, PendingFilters, RequestToken, ShopState};

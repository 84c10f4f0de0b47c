//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`products`] - catalog read/write endpoints
//! - [`admin`] - admin login and image upload
//! - [`uploads`] - serving stored upload files

pub mod admin;
pub mod health;
pub mod products;
pub mod uploads;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

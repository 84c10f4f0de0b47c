//! Authentication
//!
//! JWT issuance/validation for the admin dashboard and the request
//! extractor that turns a verified bearer token into a [`CurrentUser`].
//! The catalog handlers themselves assume the caller is authorized; only
//! the admin surface (uploads) pulls the extractor in.

pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};

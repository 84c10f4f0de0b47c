//! Katta Interiors Catalog Server
//!
//! REST backend for the storefront: CRUD over the product catalog with
//! query-parameter filtering, pagination, and facet metadata.
//!
//! # Module structure
//!
//! ```text
//! katta-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT service, admin extractor
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # Write-path validation and normalization
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # Errors, logging, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use crate::auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

//! Admin API module

mod handler;

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};

use crate::core::ServerState;

/// Upload request ceiling: the 5MB image plus multipart framing.
const UPLOAD_BODY_LIMIT: usize = 6 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route(
            "/upload-image",
            post(handler::upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}

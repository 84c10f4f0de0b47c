//! Product API module
//!
//! Write routes carry no auth layer here: authorization is an upstream
//! collaborator (reverse proxy / gateway) and the deployment in front of
//! this service mounts it before these handlers.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/meta", get(handler::meta))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

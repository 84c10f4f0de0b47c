//! Serving stored uploads
//!
//! `GET /uploads/{file}` is the public side of the upload endpoint. Files
//! are read straight off the work directory; content type comes from the
//! stored extension.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/uploads/{file}", get(serve))
}

async fn serve(State(state): State<ServerState>, Path(file): Path<String>) -> AppResult<Response> {
    // single path segment only; reject anything that could escape the dir
    if file.contains('/') || file.contains('\\') || file.contains("..") {
        return Err(AppError::not_found(format!("Upload {file}")));
    }

    let path = state.config.uploads_dir().join(&file);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Upload {file}")))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], data).into_response())
}

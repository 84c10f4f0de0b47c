//! Admin API Handlers
//!
//! Login issues the JWT the dashboard sends back as a bearer token.
//! Credentials come from the environment (`ADMIN_EMAIL`,
//! `ADMIN_PASSWORD_HASH` as an argon2 PHC string), never from source
//! literals; login is rejected while they are unset.

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum upload size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted upload extensions. Files are stored as-is; this service does
/// no image processing.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub email: String,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

/// POST /api/admin/login - verify admin credentials, issue a JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password_hash) = match (
        &state.config.admin_email,
        &state.config.admin_password_hash,
    ) {
        (Some(email), Some(hash)) => (email.clone(), hash.clone()),
        _ => {
            return Err(AppError::internal(
                "admin credentials are not configured (ADMIN_EMAIL / ADMIN_PASSWORD_HASH)",
            ));
        }
    };

    if payload.email != email || !verify_password(&payload.password, &password_hash)? {
        tracing::warn!("failed admin login attempt");
        return Err(AppError::invalid_credentials());
    }

    let token = state.jwt_service.generate_token("admin", &email, "admin")?;

    Ok(Json(LoginResponse {
        token,
        admin: AdminInfo {
            id: "admin",
            name: "Admin",
            email,
            role: "admin",
        },
    }))
}

fn verify_password(password: &str, phc_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(phc_hash)
        .map_err(|e| AppError::internal(format!("invalid ADMIN_PASSWORD_HASH: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// POST /api/admin/upload-image - store an image, return its public URL
///
/// Admin-only. The stored URL is what product payloads carry in `images`.
pub async fn upload_image(
    State(state): State<ServerState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("admin role required"));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let extension = std::path::Path::new(&original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported image format: {original_name}"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
        if data.is_empty() {
            return Err(AppError::validation("Uploaded image is empty"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large, maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let filename = format!("{}.{extension}", Uuid::new_v4());
        let uploads_dir = state.config.uploads_dir();
        tokio::fs::create_dir_all(&uploads_dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {e}")))?;
        tokio::fs::write(uploads_dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::internal(format!("Failed to store upload: {e}")))?;

        tracing::info!(file = %filename, size = data.len(), "image uploaded");

        return Ok(Json(UploadResponse {
            image_url: format!("/uploads/{filename}"),
        }));
    }

    Err(AppError::validation("No image file provided"))
}

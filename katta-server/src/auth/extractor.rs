//! Request extractor for authenticated users
//!
//! Pulls the bearer token out of the `Authorization` header, validates it
//! against the server's [`JwtService`], and hands the handler a
//! [`CurrentUser`]. Handlers guard roles themselves (`user.is_admin()`).

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::core::ServerState;
use crate::utils::AppError;

use super::jwt::{CurrentUser, JwtService};

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = JwtService::extract_from_header(header).ok_or(AppError::Unauthorized)?;
        let claims = state.jwt_service.validate_token(token)?;

        Ok(CurrentUser::from(claims))
    }
}

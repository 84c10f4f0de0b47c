//! Input validation helpers
//!
//! Centralized text length constants and field checks for the write path.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Subcategory / thickness / finish classifiers
pub const MAX_CLASSIFIER_LEN: usize = 100;

/// Product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Images per product (order-significant, first is the primary image)
pub const MAX_IMAGES: usize = 5;

// ── Field checks ────────────────────────────────────────────────────

/// Require a non-empty trimmed string within the length limit.
pub fn require_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.len()
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional string; empty after trimming counts as absent.
pub fn optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    let Some(raw) = value else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.len()
        )));
    }
    Ok(Some(trimmed.to_string()))
}

//! Product API Handlers

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};

use shared::catalog::{CatalogMeta, ProductPage, ProductQuery};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::catalog::{validate_create, validate_update};
use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::{AppError, AppResult};

/// GET /api/products - filtered, paginated catalog page
///
/// The raw query string is parsed leniently: malformed numeric parameters
/// fall back to defaults instead of failing the request.
pub async fn list(
    State(state): State<ServerState>,
    RawQuery(raw): RawQuery,
) -> AppResult<Json<ProductPage>> {
    let query = ProductQuery::from_query_str(raw.as_deref().unwrap_or(""));
    let (products, total_count) = product::list(&state.pool, &query).await?;
    Ok(Json(ProductPage::new(
        products,
        query.page,
        query.limit,
        total_count,
    )))
}

/// GET /api/products/meta - filter-option metadata for the shop UI
pub async fn meta(State(state): State<ServerState>) -> AppResult<Json<CatalogMeta>> {
    let meta = product::meta(&state.pool).await?;
    Ok(Json(meta))
}

/// GET /api/products/{id} - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let data = validate_create(payload)?;
    let created = product::create(&state.pool, data).await?;

    tracing::info!(id = created.id, name = %created.name, "product created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/products/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let patch = validate_update(payload)?;
    let updated = product::update(&state.pool, id, patch).await?;

    tracing::info!(id = updated.id, "product updated");

    Ok(Json(updated))
}

/// DELETE /api/products/{id} - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    product::delete(&state.pool, id).await?;

    tracing::info!(id, "product deleted");

    Ok(Json(true))
}

//! Write-path validation and normalization
//!
//! Turns the lenient [`ProductCreate`]/[`ProductUpdate`] DTOs into
//! storage payloads, rejecting bad input with field-level messages before
//! anything touches the database. The `images` list is canonical; the
//! scalar `image` is only ever an input fallback or a derived mirror.

use std::collections::BTreeMap;
use std::str::FromStr;

use shared::models::{Category, ImagesInput, NumberOrText, ProductCreate, ProductUpdate};

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_CLASSIFIER_LEN, MAX_DESCRIPTION_LEN, MAX_IMAGES, MAX_NAME_LEN, MAX_URL_LEN,
    optional_text, require_text,
};

/// Validated insert payload
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub thickness: Option<String>,
    pub finish: Option<String>,
    pub price: f64,
    /// 1..=5 trimmed, non-empty entries; first is the primary image
    pub images: Vec<String>,
    pub description: String,
    pub specs: BTreeMap<String, String>,
    pub is_featured: bool,
}

/// Validated partial update payload
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub thickness: Option<String>,
    pub finish: Option<String>,
    pub price: Option<f64>,
    /// Present = full replacement (1..=5 entries, mirror re-derived)
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub specs: Option<BTreeMap<String, String>>,
    pub is_featured: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.thickness.is_none()
            && self.finish.is_none()
            && self.price.is_none()
            && self.images.is_none()
            && self.description.is_none()
            && self.specs.is_none()
            && self.is_featured.is_none()
    }
}

/// Normalize an image input into a trimmed list with empties dropped.
/// Accepts a JSON array or one comma-separated string.
pub fn parse_images(input: &ImagesInput) -> Vec<String> {
    match input {
        ImagesInput::List(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        ImagesInput::Text(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    }
}

/// Validate a create payload into an insertable product.
pub fn validate_create(input: ProductCreate) -> Result<NewProduct, AppError> {
    let name = require_text(input.name.as_deref(), "name", MAX_NAME_LEN)?;
    let category = parse_category(input.category.as_deref())?
        .ok_or_else(|| AppError::validation("category is required"))?;
    let subcategory = require_text(input.subcategory.as_deref(), "subcategory", MAX_CLASSIFIER_LEN)?;
    let description = require_text(input.description.as_deref(), "description", MAX_DESCRIPTION_LEN)?;
    let thickness = optional_text(input.thickness.as_deref(), "thickness", MAX_CLASSIFIER_LEN)?;
    let finish = optional_text(input.finish.as_deref(), "finish", MAX_CLASSIFIER_LEN)?;

    let price_input = input
        .price
        .as_ref()
        .ok_or_else(|| AppError::validation("price is required"))?;
    let price = parse_price(price_input)?;

    let images = resolve_images(input.images.as_ref(), input.image.as_deref())?;

    let is_featured = match &input.is_featured {
        Some(flag) => flag
            .as_bool()
            .ok_or_else(|| AppError::validation("isFeatured must be a boolean"))?,
        None => false,
    };

    Ok(NewProduct {
        name,
        category,
        subcategory,
        thickness,
        finish,
        price,
        images,
        description,
        specs: input.specs.unwrap_or_default(),
        is_featured,
    })
}

/// Validate a partial update payload into a patch.
pub fn validate_update(input: ProductUpdate) -> Result<ProductPatch, AppError> {
    let mut patch = ProductPatch::default();

    if input.name.is_some() {
        patch.name = Some(require_text(input.name.as_deref(), "name", MAX_NAME_LEN)?);
    }
    if input.category.is_some() {
        patch.category = parse_category(input.category.as_deref())?;
    }
    if input.subcategory.is_some() {
        patch.subcategory = Some(require_text(
            input.subcategory.as_deref(),
            "subcategory",
            MAX_CLASSIFIER_LEN,
        )?);
    }
    if input.description.is_some() {
        patch.description = Some(require_text(
            input.description.as_deref(),
            "description",
            MAX_DESCRIPTION_LEN,
        )?);
    }
    patch.thickness = optional_text(input.thickness.as_deref(), "thickness", MAX_CLASSIFIER_LEN)?;
    patch.finish = optional_text(input.finish.as_deref(), "finish", MAX_CLASSIFIER_LEN)?;

    if let Some(price_input) = &input.price {
        patch.price = Some(parse_price(price_input)?);
    }

    // A present `images` replaces the list; a present `image` alone
    // collapses it to a singleton. Either way the 1..=5 invariant holds.
    if input.images.is_some() || input.image.is_some() {
        patch.images = Some(resolve_images(input.images.as_ref(), input.image.as_deref())?);
    }

    if let Some(flag) = &input.is_featured {
        patch.is_featured = Some(
            flag.as_bool()
                .ok_or_else(|| AppError::validation("isFeatured must be a boolean"))?,
        );
    }

    patch.specs = input.specs;

    Ok(patch)
}

fn parse_category(value: Option<&str>) -> Result<Option<Category>, AppError> {
    let Some(raw) = value else { return Ok(None) };
    let category = Category::from_str(raw.trim())
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(Some(category))
}

fn parse_price(input: &NumberOrText) -> Result<f64, AppError> {
    let price = input
        .as_f64()
        .ok_or_else(|| AppError::validation("price must be a number"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("price must be a non-negative number"));
    }
    Ok(price)
}

fn resolve_images(
    images: Option<&ImagesInput>,
    image: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let mut list = images.map(parse_images).unwrap_or_default();

    if list.is_empty()
        && let Some(single) = image
    {
        let trimmed = single.trim();
        if !trimmed.is_empty() {
            list.push(trimmed.to_string());
        }
    }

    if list.is_empty() {
        return Err(AppError::validation(
            "At least one product image is required",
        ));
    }
    if list.len() > MAX_IMAGES {
        return Err(AppError::validation(format!(
            "Maximum {MAX_IMAGES} images allowed per product"
        )));
    }
    for url in &list {
        if url.len() > MAX_URL_LEN {
            return Err(AppError::validation("image URL is too long"));
        }
    }

    Ok(list)
}

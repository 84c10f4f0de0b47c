//! Product Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::serde_helpers::{BoolInput, ImagesInput, NumberOrText};

/// Product category. The catalog carries exactly these two lines;
/// anything else is rejected at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Sunmica,
    Panels,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Sunmica, Category::Panels];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sunmica => "Sunmica",
            Category::Panels => "Panels",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category value outside the fixed set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid category '{0}' (expected Sunmica or Panels)")]
pub struct InvalidCategory(pub String);

impl std::str::FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunmica" => Ok(Category::Sunmica),
            "Panels" => Ok(Category::Panels),
            other => Err(InvalidCategory(other.to_string())),
        }
    }
}

/// Catalog product as stored and served.
///
/// `images` is the canonical ordered list (1..=5 entries, first is the
/// primary image); `image` is the legacy scalar mirror of `images[0]`
/// kept for callers that still read a single URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    pub price: f64,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create-product payload (admin form / import tooling).
///
/// Every field is optional at the serde layer; the write path validates
/// presence and shape so rejections carry field-level messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub thickness: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub price: Option<NumberOrText>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<ImagesInput>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub is_featured: Option<BoolInput>,
}

/// Partial update payload. A present `images` replaces the whole list and
/// re-derives the primary image; a present `image` alone collapses the
/// list to a singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub thickness: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub price: Option<NumberOrText>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<ImagesInput>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub is_featured: Option<BoolInput>,
}

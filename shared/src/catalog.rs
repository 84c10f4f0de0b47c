//! Catalog query and response shapes
//!
//! One query type shared by both sides of the wire: the server parses it
//! leniently out of a raw URL query string, the client builds the same
//! string back from typed state. Malformed numeric parameters fall back to
//! defaults and never fail a request.

use serde::{Deserialize, Serialize};

use crate::models::Product;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 12;

/// Filter/pagination parameters for `GET /api/products`.
///
/// All list filters AND together. `ids` distinguishes "absent" (no
/// restriction) from "present but nothing well-formed" (matches nothing):
/// an `ids=` parameter holding only malformed entries restricts to an
/// empty set instead of lifting the restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub thicknesses: Vec<String>,
    pub finishes: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub featured: bool,
    pub ids: Option<Vec<i64>>,
    pub exclude_id: Option<i64>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            categories: Vec::new(),
            subcategories: Vec::new(),
            thicknesses: Vec::new(),
            finishes: Vec::new(),
            min_price: None,
            max_price: None,
            search: None,
            featured: false,
            ids: None,
            exclude_id: None,
        }
    }
}

impl ProductQuery {
    /// Parse a raw URL query string (without the leading `?`).
    ///
    /// Repeated keys accumulate into lists. Non-numeric `page`/`limit`
    /// fall back to defaults, non-numeric price bounds are dropped,
    /// `featured` activates only on the literal `true`, and malformed
    /// entries in the `ids` comma list are silently skipped.
    pub fn from_query_str(raw: &str) -> Self {
        let mut query = Self::default();

        for (key, value) in parse_pairs(raw) {
            match key.as_str() {
                "page" => {
                    if let Some(page) = parse_positive(&value) {
                        query.page = page;
                    }
                }
                "limit" => {
                    if let Some(limit) = parse_positive(&value) {
                        query.limit = limit;
                    }
                }
                "category" => push_value(&mut query.categories, value),
                "subcategory" => push_value(&mut query.subcategories, value),
                "thickness" => push_value(&mut query.thicknesses, value),
                "finish" => push_value(&mut query.finishes, value),
                "search" => {
                    if !value.trim().is_empty() {
                        query.search = Some(value);
                    }
                }
                "minPrice" => query.min_price = parse_price(&value),
                "maxPrice" => query.max_price = parse_price(&value),
                "featured" => query.featured = value == "true",
                "ids" => {
                    query.ids = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .filter_map(|s| s.parse::<i64>().ok())
                            .collect(),
                    );
                }
                "excludeId" => query.exclude_id = value.trim().parse::<i64>().ok(),
                _ => {}
            }
        }

        query
    }

    /// Build the query string this type parses, with a leading `?` when
    /// any parameter is present. Inverse of [`from_query_str`] for every
    /// well-formed query.
    ///
    /// [`from_query_str`]: ProductQuery::from_query_str
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        params.push(format!("page={}", self.page));
        params.push(format!("limit={}", self.limit));

        for value in &self.categories {
            params.push(format!("category={}", urlencoding::encode(value)));
        }
        for value in &self.subcategories {
            params.push(format!("subcategory={}", urlencoding::encode(value)));
        }
        for value in &self.thicknesses {
            params.push(format!("thickness={}", urlencoding::encode(value)));
        }
        for value in &self.finishes {
            params.push(format!("finish={}", urlencoding::encode(value)));
        }

        if let Some(min) = self.min_price {
            params.push(format!("minPrice={min}"));
        }
        if let Some(max) = self.max_price {
            params.push(format!("maxPrice={max}"));
        }
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if self.featured {
            params.push("featured=true".to_string());
        }
        if let Some(ids) = &self.ids {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("ids={joined}"));
        }
        if let Some(exclude) = self.exclude_id {
            params.push(format!("excludeId={exclude}"));
        }

        format!("?{}", params.join("&"))
    }
}

fn parse_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.split('&').filter(|s| !s.is_empty()).map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key), decode_component(value))
    })
}

fn decode_component(raw: &str) -> String {
    // '+' means space in form-encoded query strings
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn push_value(values: &mut Vec<String>, value: String) {
    if !value.trim().is_empty() {
        values.push(value);
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub limit: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, page: u32, limit: u32, total_count: u64) -> Self {
        Self {
            products,
            page,
            limit,
            total_count,
            total_pages: total_pages_for(total_count, limit),
        }
    }

    /// An empty page, e.g. what the client renders when a request fails.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self::new(Vec::new(), page, limit, 0)
    }
}

/// `max(1, ceil(total / limit))`; an empty catalog still has one page.
pub fn total_pages_for(total_count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    (total_count.div_ceil(limit as u64)).max(1) as u32
}

/// One category facet: the category name and every distinct subcategory
/// seen under it across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Global price bounds; `{0, 0}` when the catalog is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// Filter-option metadata for the shop UI. Always reflects the full
/// catalog, never a filtered subset, so options don't shrink as filters
/// are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub categories: Vec<CategoryFacet>,
    pub thicknesses: Vec<String>,
    pub finishes: Vec<String>,
    pub price: PriceBounds,
}

impl CatalogMeta {
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            thicknesses: Vec::new(),
            finishes: Vec::new(),
            price: PriceBounds { min: 0.0, max: 0.0 },
        }
    }
}

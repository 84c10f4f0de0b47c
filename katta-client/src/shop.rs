//! Shop page filter state
//!
//! Two-phase filter editing: a *pending* selection mutated by the filter
//! widgets and an *applied* selection that actually parameterizes the
//! catalog query. Applying copies pending over applied and resets to page
//! 1; paging keeps the applied selection. Each issued query carries a
//! [`RequestToken`]; only the latest token may commit its response, so
//! out-of-order responses from un-cancelled requests are discarded.

use shared::catalog::{CatalogMeta, ProductPage, ProductQuery};

/// One filter selection: the facet values the shopper ticked plus the
/// price slider range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub categories: Vec<String>,
    pub thicknesses: Vec<String>,
    pub finishes: Vec<String>,
    /// Inclusive [min, max]; seeded from the catalog's price bounds
    pub price: Option<(f64, f64)>,
}

/// The selection currently being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFilters(pub FilterSelection);

/// The last-submitted selection driving queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFilters(pub FilterSelection);

/// Token tying a response to the request generation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Shop page state machine.
#[derive(Debug, Default)]
pub struct ShopState {
    pending: PendingFilters,
    applied: AppliedFilters,
    page: u32,
    total_pages: u32,
    meta: Option<CatalogMeta>,
    generation: u64,
}

impl ShopState {
    pub fn new() -> Self {
        Self {
            pending: PendingFilters::default(),
            applied: AppliedFilters::default(),
            page: 1,
            total_pages: 1,
            meta: None,
            generation: 0,
        }
    }

    /// Seed the state from facet metadata (fetched once per session):
    /// both pending and applied price ranges start at the catalog bounds.
    pub fn seed(&mut self, meta: CatalogMeta) {
        let bounds = (meta.price.min, meta.price.max);
        self.pending.0.price = Some(bounds);
        self.applied.0.price = Some(bounds);
        self.meta = Some(meta);
    }

    pub fn meta(&self) -> Option<&CatalogMeta> {
        self.meta.as_ref()
    }

    pub fn pending(&self) -> &PendingFilters {
        &self.pending
    }

    pub fn applied(&self) -> &AppliedFilters {
        &self.applied
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Widget edits mutate the pending selection only; nothing is queried
    /// until the shopper applies.
    pub fn set_pending(&mut self, pending: PendingFilters) {
        self.pending = pending;
    }

    /// Apply the pending selection: it becomes the applied one, the page
    /// resets to 1, and the query to issue is returned.
    pub fn apply(&mut self) -> (RequestToken, ProductQuery) {
        self.applied = AppliedFilters(self.pending.0.clone());
        self.page = 1;
        self.issue()
    }

    /// Navigate to a page (clamped into range), keeping applied filters.
    pub fn go_to_page(&mut self, page: u32) -> (RequestToken, ProductQuery) {
        self.page = page.clamp(1, self.total_pages.max(1));
        self.issue()
    }

    /// The query the current applied selection and page describe.
    pub fn query(&self) -> ProductQuery {
        let selection = &self.applied.0;
        ProductQuery {
            page: self.page,
            categories: selection.categories.clone(),
            thicknesses: selection.thicknesses.clone(),
            finishes: selection.finishes.clone(),
            min_price: selection.price.map(|(min, _)| min),
            max_price: selection.price.map(|(_, max)| max),
            ..Default::default()
        }
    }

    /// Commit a successful response. Returns false (and changes nothing)
    /// when a newer request has been issued since this token: the latest
    /// request wins.
    pub fn commit(&mut self, token: RequestToken, page: &ProductPage) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.total_pages = page.total_pages;
        true
    }

    /// Commit a failed request: the shop renders an empty result set
    /// rather than surfacing the error. Returns the page to render, or
    /// `None` when the failure is stale and should be ignored.
    pub fn commit_failure(&mut self, token: RequestToken) -> Option<ProductPage> {
        if token.0 != self.generation {
            return None;
        }
        self.total_pages = 1;
        Some(ProductPage::empty(self.page, shared::catalog::DEFAULT_LIMIT))
    }

    fn issue(&mut self) -> (RequestToken, ProductQuery) {
        self.generation += 1;
        (RequestToken(self.generation), self.query())
    }
}

use serde::Deserialize;

use crate::server::error::AppError;

/// Largest page size a listing will serve.
pub const MAX_ENTRIES: u64 = 100;

fn default_entries() -> u64 {
    10
}

/// Resolves a requested page into `(page, per_page)`.
///
/// `entries` is clamped to `1..=MAX_ENTRIES`. A page whose row offset does not fit
/// in a `u64` is rejected.
fn page_window(page: u64, entries: u64) -> Result<(u64, u64), AppError> {
    let per_page = entries.clamp(1, MAX_ENTRIES);
    if page.checked_mul(per_page).is_none() {
        return Err(AppError::BadRequest(format!("page {} is out of range", page)));
    }

    Ok((page, per_page))
}

/// Query parameters shared by every paginated listing.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParam {
    /// Page and page size to query, see [`page_window`].
    pub fn window(&self) -> Result<(u64, u64), AppError> {
        page_window(self.page, self.entries)
    }
}

/// Catalogue listing query. Kept flat because query strings cannot carry a
/// flattened numeric struct.
#[derive(Debug, Deserialize)]
pub struct ProductListParam {
    pub brand: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl ProductListParam {
    pub fn window(&self) -> Result<(u64, u64), AppError> {
        page_window(self.page, self.entries)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParam {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct PriceSortParam {
    pub order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackQueryParam {
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub product_id: Option<i32>,
}

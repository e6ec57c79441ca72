use serde::{Deserialize, Serialize};

/// A single vehicle record returned by the catalog API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    /// Price in whole rubles, as published by the catalog.
    pub price: i64,
    /// Photo URLs in catalog order; may be empty.
    pub images: Vec<String>,
}

impl Car {
    /// Display title shown on the card, e.g. "LADA Vesta".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Paging metadata reported by the catalog for a list response.
///
/// `current_page <= total_pages` is not enforced here: an out-of-range
/// page is passed through to the catalog and its response rendered as-is.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PageMeta {
    pub total_pages: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_items: usize,
}

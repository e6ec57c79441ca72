//! Parsed query state and view models for the index page.

use serde::{Deserialize, Serialize};

use crate::domain::car::Car;
use crate::pagination::{Paginated, clear_sort_url, sort_url};

/// Raw query-string shape. A URL may repeat a parameter, so every field
/// collects into a sequence; the first value wins.
#[derive(Debug, Default, Deserialize)]
struct RawIndexQuery {
    #[serde(rename = "_page", default)]
    page: Vec<String>,
    #[serde(rename = "_sort", default)]
    sort: Vec<String>,
    #[serde(rename = "_order", default)]
    order: Vec<String>,
}

/// Pagination and sort state parsed from the inbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexQuery {
    /// Requested page, at least 1.
    pub page: usize,
    /// Sort field as supplied, not validated.
    pub sort: Option<String>,
    /// Sort order as supplied, not validated.
    pub order: Option<String>,
}

impl Default for IndexQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort: None,
            order: None,
        }
    }
}

impl IndexQuery {
    /// Parses the raw query string. Absent, unparseable, or zero `_page`
    /// values fall back to page 1.
    #[must_use]
    pub fn parse(query_string: &str) -> Self {
        let raw: RawIndexQuery = serde_html_form::from_str(query_string).unwrap_or_default();

        let page = raw
            .page
            .into_iter()
            .next()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);

        Self {
            page,
            sort: raw.sort.into_iter().next(),
            order: raw.order.into_iter().next(),
        }
    }

    /// Sorting takes effect only when both field and order were supplied.
    #[must_use]
    pub fn sort_pair(&self) -> Option<(&str, &str)> {
        match (&self.sort, &self.order) {
            (Some(sort), Some(order)) => Some((sort.as_str(), order.as_str())),
            _ => None,
        }
    }
}

/// A single vehicle card on the index page.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CarCard {
    pub title: String,
    /// Formatted price with thousands grouping and a ruble sign.
    pub price: String,
    /// First photo URL; the card renders without an image when absent.
    pub image: Option<String>,
}

impl From<Car> for CarCard {
    fn from(car: Car) -> Self {
        Self {
            title: car.title(),
            price: format_price(car.price),
            image: car.images.into_iter().next(),
        }
    }
}

/// Groups digits in threes, e.g. `1234567` becomes `1 234 567 ₽`.
#[must_use]
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if price < 0 {
        format!("-{grouped} ₽")
    } else {
        format!("{grouped} ₽")
    }
}

/// Sort-control links and their active state.
#[derive(Clone, Debug, Serialize)]
pub struct SortState {
    pub price_asc_url: String,
    pub price_desc_url: String,
    pub clear_url: String,
    pub asc_active: bool,
    pub desc_active: bool,
    /// The clear link is offered when either parameter was supplied.
    pub show_clear: bool,
}

impl SortState {
    #[must_use]
    pub fn new(query: &IndexQuery) -> Self {
        let is_price = query.sort.as_deref() == Some("price");

        Self {
            price_asc_url: sort_url("price", "asc"),
            price_desc_url: sort_url("price", "desc"),
            clear_url: clear_sort_url(query.page),
            asc_active: is_price && query.order.as_deref() == Some("asc"),
            desc_active: is_price && query.order.as_deref() == Some("desc"),
            show_clear: query.sort.is_some() || query.order.is_some(),
        }
    }
}

/// Data required to render the index template.
pub struct IndexPageData {
    /// Cards for the fetched page of vehicles.
    pub cars: Vec<CarCard>,
    /// Pagination bar state derived from the catalog paging metadata.
    pub pagination: Paginated,
    /// Sort controls echoing the current query state.
    pub sort: SortState,
}

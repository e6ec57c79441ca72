//! The catalog API collaborator.
//!
//! The rest of the crate talks to the remote catalog only through
//! [`CatalogReader`], so services can be tested against doubles.

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

use async_trait::async_trait;

use crate::domain::car::{Car, PageMeta};
use crate::pagination::DEFAULT_CARS_PER_PAGE;

pub use errors::{CatalogError, CatalogResult};
pub use http::HttpCatalogClient;

/// Parameters for one catalog list request.
#[derive(Clone, Debug, PartialEq)]
pub struct CarListQuery {
    pub page: usize,
    pub limit: usize,
    /// Sort field and order; applied only when both were supplied.
    pub sort: Option<(String, String)>,
}

impl CarListQuery {
    #[must_use]
    pub fn new(page: usize) -> Self {
        Self {
            page,
            limit: DEFAULT_CARS_PER_PAGE,
            sort: None,
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort = Some((field.into(), order.into()));
        self
    }

    /// Query-string pairs in the order the catalog API expects them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("_limit", self.limit.to_string()),
            ("_page", self.page.to_string()),
        ];
        if let Some((field, order)) = &self.sort {
            pairs.push(("_sort", field.clone()));
            pairs.push(("_order", order.clone()));
        }
        pairs
    }
}

/// One page of catalog results.
#[derive(Clone, Debug, PartialEq)]
pub struct CarListing {
    pub cars: Vec<Car>,
    pub meta: PageMeta,
}

/// Read access to the remote vehicle catalog.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn fetch_cars(&self, query: CarListQuery) -> CatalogResult<CarListing>;
}

//! Reqwest-backed implementation of [`CatalogReader`].

use async_trait::async_trait;
use reqwest::Client;

use crate::catalog::{CarListQuery, CarListing, CatalogError, CatalogReader, CatalogResult};
use crate::domain::car::Car;
use crate::models::catalog::CarsApiResponse;

#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogClient {
    async fn fetch_cars(&self, query: CarListQuery) -> CatalogResult<CarListing> {
        let response = self
            .http
            .get(format!("{}/cars", self.base_url))
            .query(&query.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body: CarsApiResponse = response.json().await?;

        Ok(CarListing {
            cars: body.data.into_iter().map(Car::from).collect(),
            meta: body.meta.into(),
        })
    }
}

//! Mock catalog implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::catalog::{CarListQuery, CarListing, CatalogReader, CatalogResult};

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogReader for Catalog {
        async fn fetch_cars(&self, query: CarListQuery) -> CatalogResult<CarListing>;
    }
}

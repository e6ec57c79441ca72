//! Wire-format records for the catalog API JSON body.
//!
//! Kept separate from the domain types so upstream field naming
//! (`mark_id`, `_total_rows`, nested `images.image`) stays at the boundary.

use serde::Deserialize;

use crate::domain::car::{Car, PageMeta};

#[derive(Debug, Deserialize)]
pub struct CarsApiResponse {
    pub data: Vec<ApiCar>,
    pub meta: ApiMeta,
}

#[derive(Debug, Deserialize)]
pub struct ApiCar {
    #[serde(default)]
    pub id: i64,
    pub mark_id: String,
    pub folder_id: String,
    pub price: i64,
    /// Absent for records without photos.
    #[serde(default)]
    pub images: Option<ApiImages>,
}

#[derive(Debug, Deserialize)]
pub struct ApiImages {
    #[serde(default)]
    pub image: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMeta {
    pub last_page: usize,
    #[serde(rename = "_limit")]
    pub limit: usize,
    pub page: usize,
    #[serde(rename = "_total_rows")]
    pub total_rows: usize,
}

impl From<ApiCar> for Car {
    fn from(car: ApiCar) -> Self {
        Self {
            id: car.id,
            make: car.mark_id,
            model: car.folder_id,
            price: car.price,
            images: car.images.map(|i| i.image).unwrap_or_default(),
        }
    }
}

impl From<ApiMeta> for PageMeta {
    fn from(meta: ApiMeta) -> Self {
        Self {
            total_pages: meta.last_page,
            page_size: meta.limit,
            current_page: meta.page,
            total_items: meta.total_rows,
        }
    }
}

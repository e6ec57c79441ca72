use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {0}")]
    Status(StatusCode),

    /// Transport failure or an undecodable response body.
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

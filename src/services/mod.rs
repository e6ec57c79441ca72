pub mod main;

use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

//! Application services orchestrating the quote client and the repository.

use thiserror::Error;

use crate::generator::errors::QuoteError;
use crate::repository::errors::RepositoryError;

pub mod quote;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Quote service failure: {0}")]
    Quote(#[from] QuoteError),

    #[error("Repository failure: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

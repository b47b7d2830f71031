//! Persistence layer for recipients.
//!
//! Callers depend on the reader traits declared here rather than on
//! [`DieselRepository`], so handlers and services can be exercised against
//! test doubles.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::recipient::Recipient;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod recipient;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait RecipientReader {
    /// Returns every stored recipient in the store's natural scan order.
    fn list_recipients(&self) -> RepositoryResult<Vec<Recipient>>;
}

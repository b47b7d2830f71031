//! Conversion errors raised when a stored row cannot become a domain value.

use thiserror::Error;

/// Errors produced when attempting to construct a domain value from raw data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A required column held no value.
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
}

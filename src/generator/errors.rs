use thiserror::Error;

/// Failures raised while obtaining a quote from the upstream service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid quote service url: {0}")]
    InvalidUrl(String),

    /// The upstream could not be reached (DNS, refused connection, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Quote service responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to decode quote: {0}")]
    Decode(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;

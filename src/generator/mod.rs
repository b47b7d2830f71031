//! Client side of the upstream quote service.
//!
//! [`QuoteGenerator`] is the seam used by the HTTP layer; [`HttpTransport`] is
//! the seam used by [`forismatic::ForismaticClient`] to reach the network.

use std::future::Future;

use reqwest::{Request, StatusCode};

use crate::domain::quote::Quote;
use crate::generator::errors::QuoteResult;

pub mod errors;
pub mod forismatic;
pub mod transport;

/// Raw response handed back by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes a single outbound HTTP request.
pub trait HttpTransport: Send + Sync {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = QuoteResult<TransportResponse>> + Send;
}

/// Produces a quote in the requested language.
pub trait QuoteGenerator: Send + Sync {
    fn generate(&self, lang: &str) -> impl Future<Output = QuoteResult<Quote>> + Send;
}

//! Production transport backed by `reqwest`.

use std::time::Duration;

use reqwest::{Client, Request};

use crate::generator::errors::{QuoteError, QuoteResult};
use crate::generator::{HttpTransport, TransportResponse};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> QuoteResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> QuoteResult<TransportResponse> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

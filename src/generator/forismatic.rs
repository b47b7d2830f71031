//! Client for the Forismatic quote API.

use reqwest::{Method, Request, StatusCode, Url};
use serde::Deserialize;

use crate::domain::quote::Quote;
use crate::generator::errors::{QuoteError, QuoteResult};
use crate::generator::{HttpTransport, QuoteGenerator};

/// Payload returned by the upstream service. Extra fields such as
/// `senderName` or `quoteLink` are ignored.
#[derive(Debug, Deserialize)]
struct ForismaticQuote {
    #[serde(rename = "quoteText")]
    text: String,
    #[serde(rename = "quoteAuthor")]
    author: String,
}

#[derive(Debug, Clone)]
pub struct ForismaticClient<T> {
    url: Url,
    transport: T,
}

impl<T: HttpTransport> ForismaticClient<T> {
    pub fn new(url: &str, transport: T) -> QuoteResult<Self> {
        let url = Url::parse(url).map_err(|e| QuoteError::InvalidUrl(e.to_string()))?;
        Ok(Self { url, transport })
    }

    /// Builds `GET <url>?method=getQuote&format=json&lang=<lang>`, replacing
    /// any query already present on the base url.
    fn build_request(&self, lang: &str) -> Request {
        let mut url = self.url.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("method", "getQuote")
            .append_pair("format", "json")
            .append_pair("lang", lang);
        Request::new(Method::GET, url)
    }
}

impl<T: HttpTransport> QuoteGenerator for ForismaticClient<T> {
    async fn generate(&self, lang: &str) -> QuoteResult<Quote> {
        let request = self.build_request(lang);

        let response = self.transport.execute(request).await?;
        if response.status != StatusCode::OK {
            return Err(QuoteError::UpstreamStatus(response.status.as_u16()));
        }

        let payload: ForismaticQuote = serde_json::from_slice(&response.body)
            .map_err(|e| QuoteError::Decode(e.to_string()))?;

        Ok(Quote::new(payload.text, payload.author, lang))
    }
}

//! Payload returned by `GET /quote`.

use serde::Serialize;

use crate::domain::quote::Quote;
use crate::domain::recipient::Recipient;

/// Query parameters accepted by the `/quote` endpoint.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QuoteQuery {
    /// Language code forwarded to the quote service. Missing means empty.
    pub lang: String,
}

impl QuoteQuery {
    /// Picks the first `lang` value; repeated or unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let lang = pairs
            .into_iter()
            .find(|(key, _)| key == "lang")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { lang }
    }
}

/// Quote paired with everyone who should receive it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteResponse {
    pub quote: Quote,
    pub recipients: Vec<Recipient>,
}

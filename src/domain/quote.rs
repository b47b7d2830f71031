use serde::{Deserialize, Serialize};

/// Inspirational quote returned to API consumers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Quote {
    #[serde(rename = "quoteText")]
    pub text: String,
    #[serde(rename = "quoteAuthor")]
    pub author: String,
    /// Language code the quote was requested in.
    pub lang: String,
}

impl Quote {
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            lang: lang.into(),
        }
    }
}

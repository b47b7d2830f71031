//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Base URL of the upstream quote service.
    pub quote_service_url: String,
    /// Timeout applied to every outbound quote request, in seconds.
    #[serde(default = "default_quote_service_timeout_secs")]
    pub quote_service_timeout_secs: u64,
}

fn default_quote_service_timeout_secs() -> u64 {
    30
}

impl ServerConfig {
    pub fn quote_service_timeout(&self) -> Duration {
        Duration::from_secs(self.quote_service_timeout_secs)
    }
}

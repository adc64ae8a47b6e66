//! Fetch settings shared by the market and quote fetchers.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `QUOTEBAR_QUOTES_URL` | [`DEFAULT_QUOTES_URL`] |
//! | `QUOTEBAR_TIMEOUT_MS` | [`DEFAULT_TIMEOUT_MS`] |
//! | `QUOTEBAR_USER_AGENT` | `quotebar/<version>` |

use std::env;

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::ValidationError;

/// Batched quote endpoint.
pub const DEFAULT_QUOTES_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Fixed parameters appended after the symbol list.
pub const QUOTE_QUERY_TAIL: &str = "&range=1d&interval=5m&indicators=close&includeTimestamps=false&includePrePost=false&corsDomain=finance.yahoo.com&.tsrc=finance";

const DEFAULT_USER_AGENT: &str = concat!("quotebar/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub quotes_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            quotes_url: String::from(DEFAULT_QUOTES_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with `QUOTEBAR_*` environment variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let mut config = Self::default();

        if let Some(url) = lookup("QUOTEBAR_QUOTES_URL").filter(|url| !url.trim().is_empty()) {
            config.quotes_url = url.trim().to_owned();
        }
        if let Some(raw) = lookup("QUOTEBAR_TIMEOUT_MS") {
            let timeout_ms =
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ValidationError::InvalidSetting {
                        name: "QUOTEBAR_TIMEOUT_MS",
                        value: raw.clone(),
                    })?;
            config = config.with_timeout_ms(timeout_ms)?;
        }
        if let Some(agent) = lookup("QUOTEBAR_USER_AGENT").filter(|agent| !agent.is_empty()) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    pub fn with_quotes_url(mut self, url: impl Into<String>) -> Self {
        self.quotes_url = url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }
}

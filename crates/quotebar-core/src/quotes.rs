//! Batched quote fetching with a readiness gate.
//!
//! A [`QuoteBook`] holds the requested tickers and the most recent result
//! set. [`QuoteFetcher::refresh`] replaces that set wholesale on success and
//! leaves it untouched on failure or when the gate says no fetch is needed.

use std::sync::Arc;

use tracing::debug;

use crate::config::FetchConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{yahoo, FetchError, StockQuote, Symbol};

/// Whether a quote fetch should run.
///
/// Fetch once when the market is closed, otherwise on every call. An empty
/// ticker list never fetches.
pub const fn is_ready(ticker_count: usize, market_is_closed: bool, has_prior_results: bool) -> bool {
    ticker_count > 0 && (!has_prior_results || !market_is_closed)
}

/// Requested tickers plus the latest parsed quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteBook {
    tickers: Vec<Symbol>,
    stocks: Option<Vec<StockQuote>>,
}

impl QuoteBook {
    pub fn new(tickers: Vec<Symbol>) -> Self {
        Self {
            tickers,
            stocks: None,
        }
    }

    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }

    /// Latest quotes, empty until the first successful fetch.
    pub fn stocks(&self) -> &[StockQuote] {
        self.stocks.as_deref().unwrap_or_default()
    }

    pub fn has_results(&self) -> bool {
        self.stocks.is_some()
    }

    pub fn is_ready(&self, market_is_closed: bool) -> bool {
        is_ready(self.tickers.len(), market_is_closed, self.has_results())
    }
}

#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    config: FetchConfig,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FetchConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn with_reqwest(config: FetchConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Fetch quotes for every ticker in one request and parse them.
    ///
    /// An empty ticker list returns an empty set without touching the
    /// network.
    pub async fn fetch(&self, tickers: &[Symbol]) -> Result<Vec<StockQuote>, FetchError> {
        if tickers.is_empty() {
            return Ok(Vec::new());
        }

        let results = yahoo::fetch_results(&self.http_client, &self.config, tickers).await?;
        Ok(results.iter().map(StockQuote::from_display_fields).collect())
    }

    /// Refresh `book` if the readiness gate allows it.
    ///
    /// Returns the book's current quotes. On error the previous quotes stay
    /// in the book and remain reachable through [`QuoteBook::stocks`].
    pub async fn refresh<'b>(
        &self,
        book: &'b mut QuoteBook,
        market_is_closed: bool,
    ) -> Result<&'b [StockQuote], FetchError> {
        if !book.is_ready(market_is_closed) {
            debug!(
                tickers = book.tickers.len(),
                market_is_closed,
                has_results = book.has_results(),
                "quote refresh skipped"
            );
            return Ok(book.stocks());
        }

        let stocks = self.fetch(&book.tickers).await?;
        debug!(quotes = stocks.len(), "quote book refreshed");
        book.stocks = Some(stocks);
        Ok(book.stocks())
    }
}

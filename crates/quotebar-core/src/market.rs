//! Market snapshot: Dow, Nasdaq and S&P 500 levels plus the open/closed flag.

use std::sync::Arc;

use tracing::debug;

use crate::config::FetchConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::normalize::DisplayFields;
use crate::{yahoo, FetchError, IndexQuote, MarketIndex, MarketSnapshot};

/// Provider `marketState` value for the regular trading session.
const REGULAR_SESSION: &str = "REGULAR";

#[derive(Clone)]
pub struct MarketFetcher {
    http_client: Arc<dyn HttpClient>,
    config: FetchConfig,
}

impl MarketFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FetchConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn with_reqwest(config: FetchConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Fetch the current index levels in a single request.
    pub async fn fetch(&self) -> Result<MarketSnapshot, FetchError> {
        let symbols = MarketIndex::ALL.map(MarketIndex::symbol);
        let results = yahoo::fetch_results(&self.http_client, &self.config, &symbols).await?;
        let snapshot = snapshot_from_results(&results);
        debug!(is_closed = snapshot.is_closed, "market snapshot fetched");
        Ok(snapshot)
    }
}

/// Assemble a snapshot from normalized index results.
///
/// Indices missing from the response keep empty fields. The market counts as
/// open when any returned index reports the regular session.
pub fn snapshot_from_results(results: &[DisplayFields]) -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::default();
    let mut any_regular = false;

    for fields in results {
        let Some(index) = fields
            .get("symbol")
            .and_then(|symbol| MarketIndex::from_symbol(symbol))
        else {
            continue;
        };

        *snapshot.index_mut(index) = IndexQuote::from_display_fields(fields);
        any_regular |= fields
            .get("marketState")
            .is_some_and(|state| state.eq_ignore_ascii_case(REGULAR_SESSION));
    }

    snapshot.is_closed = !any_regular;
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_fields(symbol: &str, price: &str, state: &str) -> DisplayFields {
        [
            ("symbol", symbol),
            ("regularMarketPrice", price),
            ("regularMarketChange", "-12.500"),
            ("regularMarketChangePercent", "-0.031"),
            ("marketState", state),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
    }

    #[test]
    fn fills_each_index_and_detects_open_market() {
        let snapshot = snapshot_from_results(&[
            index_fields("^DJI", "39512.840", "REGULAR"),
            index_fields("^IXIC", "16340.870", "REGULAR"),
            index_fields("^GSPC", "5222.680", "REGULAR"),
        ]);

        assert_eq!(snapshot.dow.latest, "39512.840");
        assert_eq!(snapshot.nasdaq.latest, "16340.870");
        assert_eq!(snapshot.sp500.change, "-12.500");
        assert_eq!(snapshot.sp500.percent, "-0.031");
        assert!(!snapshot.is_closed);
    }

    #[test]
    fn non_regular_sessions_mean_closed() {
        let snapshot = snapshot_from_results(&[
            index_fields("^DJI", "1", "POST"),
            index_fields("^GSPC", "2", "CLOSED"),
        ]);
        assert!(snapshot.is_closed);
    }

    #[test]
    fn missing_index_leaves_empty_entry() {
        let snapshot = snapshot_from_results(&[index_fields("^DJI", "39512.840", "PRE")]);
        assert!(!snapshot.dow.is_empty());
        assert!(snapshot.nasdaq.is_empty());
        assert!(snapshot.sp500.is_empty());
    }

    #[test]
    fn empty_results_are_closed_and_blank() {
        let snapshot = snapshot_from_results(&[]);
        assert!(snapshot.is_closed);
        assert_eq!(snapshot.dow, IndexQuote::default());
    }
}

//! Behavior-driven tests for the market snapshot fetcher

use std::sync::Arc;

use quotebar_core::{
    FetchConfig, FetchError, FixtureHttpClient, IndexQuote, MarketFetcher, MarketIndex,
};

fn fetcher_with(client: Arc<FixtureHttpClient>) -> MarketFetcher {
    MarketFetcher::new(client, FetchConfig::default())
}

#[tokio::test]
async fn snapshot_requests_the_three_indices_in_one_call() {
    let client = Arc::new(FixtureHttpClient::json(r#"{"quoteResponse":{"result":[]}}"#));
    let fetcher = fetcher_with(client.clone());

    fetcher.fetch().await.expect("fetch should succeed");

    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].url.contains("symbols=%5EDJI,%5EIXIC,%5EGSPC&"),
        "unexpected url: {}",
        requests[0].url
    );
}

#[tokio::test]
async fn open_market_snapshot_is_fully_populated() {
    // Given: all three indices trading in the regular session
    let body = r#"{"quoteResponse":{"result":[
        {"symbol":"^DJI","regularMarketPrice":39512.84,"regularMarketChange":125.08,"regularMarketChangePercent":0.32,"marketState":"REGULAR"},
        {"symbol":"^IXIC","regularMarketPrice":16340.87,"regularMarketChange":-45.2,"regularMarketChangePercent":-0.28,"marketState":"REGULAR"},
        {"symbol":"^GSPC","regularMarketPrice":5222.68,"regularMarketChange":8.1,"regularMarketChangePercent":0.16,"marketState":"REGULAR"}
    ]}}"#;
    let fetcher = fetcher_with(Arc::new(FixtureHttpClient::json(body)));

    // When: the snapshot is fetched
    let snapshot = fetcher.fetch().await.expect("fetch should succeed");

    // Then: every entry is filled and the market is open
    assert!(!snapshot.is_closed);
    assert_eq!(
        snapshot.index(MarketIndex::Dow),
        &IndexQuote {
            latest: String::from("39512.840"),
            change: String::from("125.080"),
            percent: String::from("0.320"),
        }
    );
    assert_eq!(snapshot.nasdaq.change, "-45.200");
    assert_eq!(snapshot.sp500.latest, "5222.680");
}

#[tokio::test]
async fn missing_index_does_not_fail_the_snapshot() {
    // Given: a response without the Nasdaq entry after hours
    let body = r#"{"quoteResponse":{"result":[
        {"symbol":"^DJI","regularMarketPrice":39512.84,"marketState":"POST"},
        {"symbol":"^GSPC","regularMarketPrice":5222.68,"marketState":"POST"}
    ]}}"#;
    let fetcher = fetcher_with(Arc::new(FixtureHttpClient::json(body)));

    // When: the snapshot is fetched
    let snapshot = fetcher.fetch().await.expect("partial data is acceptable");

    // Then: Nasdaq is empty and the market reads as closed
    assert!(snapshot.nasdaq.is_empty());
    assert_eq!(snapshot.dow.latest, "39512.840");
    assert_eq!(snapshot.dow.change, "");
    assert!(snapshot.is_closed);
}

#[tokio::test]
async fn transport_and_shape_failures_are_reported() {
    let error = fetcher_with(Arc::new(FixtureHttpClient::failing("dns lookup failed")))
        .fetch()
        .await
        .expect_err("must fail");
    assert!(matches!(error, FetchError::Transport(message) if message.contains("dns")));

    let error = fetcher_with(Arc::new(FixtureHttpClient::status(500, "")))
        .fetch()
        .await
        .expect_err("must fail");
    assert_eq!(error, FetchError::Status { status: 500 });

    let error = fetcher_with(Arc::new(FixtureHttpClient::json(r#"{"chart":{}}"#)))
        .fetch()
        .await
        .expect_err("must fail");
    assert!(error.is_malformed());
}

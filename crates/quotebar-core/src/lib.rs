//! # Quotebar Core
//!
//! Quote fetching and display normalization for the `quotebar` CLI.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint, timeout and user-agent settings |
//! | [`domain`] | Domain models (StockQuote, MarketSnapshot, Symbol) |
//! | [`error`] | Validation and fetch errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`market`] | Market index snapshot fetcher |
//! | [`normalize`] | JSON value to display string conversion |
//! | [`quotes`] | Batched quote fetcher and readiness gate |
//! | [`range_bar`] | 52-week range bar rendering |
//! | [`yahoo`] | Provider URL construction and envelope parsing |
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ MarketFetcher│──▶│ QuoteFetcher │──▶│  range_bar   │
//! └──────┬───────┘   └──────┬───────┘   └──────────────┘
//!        │ is_closed        │ one batched GET
//!        ▼                  ▼
//!   MarketSnapshot      QuoteBook (Vec<StockQuote>)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use quotebar_core::{FetchConfig, MarketFetcher, QuoteBook, QuoteFetcher, Symbol};
//!
//! let config = FetchConfig::from_env()?;
//! let market = MarketFetcher::with_reqwest(config.clone()).fetch().await?;
//! let mut book = QuoteBook::new(Symbol::parse_list("AAPL,MSFT")?);
//! let quotes = QuoteFetcher::with_reqwest(config)
//!     .refresh(&mut book, market.is_closed)
//!     .await?;
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod market;
pub mod normalize;
pub mod quotes;
pub mod range_bar;
pub mod yahoo;

pub use config::FetchConfig;
pub use domain::{IndexQuote, MarketIndex, MarketSnapshot, StockQuote, Symbol};
pub use error::{FetchError, ValidationError};
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use market::MarketFetcher;
pub use quotes::{QuoteBook, QuoteFetcher};
pub use range_bar::{quote_range_bar, range_bar, range_position, BAR_WIDTH};

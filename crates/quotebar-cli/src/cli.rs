//! CLI argument definitions for quotebar.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--timeout-ms` | `QUOTEBAR_TIMEOUT_MS` or 10000 | Request timeout in ms |
//! | `--quotes-url` | `QUOTEBAR_QUOTES_URL` or Yahoo v7 | Quote endpoint |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//!
//! Flags override the `QUOTEBAR_*` environment read by `FetchConfig::from_env`.
//!
//! # Examples
//!
//! ```bash
//! quotebar AAPL
//! quotebar AAPL,MSFT,IBM
//! quotebar AAPL MSFT --format json
//! ```

use clap::{Parser, ValueEnum};

/// Print index levels and stock quotes with a 52-week range bar.
#[derive(Debug, Parser)]
#[command(name = "quotebar", author, version, about)]
pub struct Cli {
    /// Ticker symbols, space or comma separated.
    #[arg(value_name = "TICKERS", value_delimiter = ',')]
    pub tickers: Vec<String>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Request timeout in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Override the batched quote endpoint.
    #[arg(long)]
    pub quotes_url: Option<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated report with range bars.
    Text,
    /// Pretty JSON of the market snapshot and quotes.
    Json,
}

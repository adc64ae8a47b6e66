mod cli;
mod error;
mod output;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;
use quotebar_core::{FetchConfig, MarketFetcher, QuoteBook, QuoteFetcher, Symbol};
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.log_level);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let tickers = parse_tickers(&cli.tickers)?;
    let config = build_config(cli)?;
    debug!(tickers = tickers.len(), timeout_ms = config.timeout_ms, "starting quote run");

    let market = MarketFetcher::with_reqwest(config.clone())
        .fetch()
        .await
        .map_err(CliError::Market)?;

    let mut book = QuoteBook::new(tickers);
    let quotes = QuoteFetcher::with_reqwest(config)
        .refresh(&mut book, market.is_closed)
        .await
        .map_err(CliError::Quotes)?;

    let stdout = std::io::stdout();
    output::render(&mut stdout.lock(), cli.format, &market, quotes)
}

fn parse_tickers(raw: &[String]) -> Result<Vec<Symbol>, CliError> {
    let tickers = raw
        .iter()
        .map(|entry| Symbol::parse_list(entry))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    if tickers.is_empty() {
        return Err(CliError::Usage {
            program: program_name(),
        });
    }
    Ok(tickers)
}

fn build_config(cli: &Cli) -> Result<FetchConfig, CliError> {
    let mut config = FetchConfig::from_env()?;
    if let Some(url) = &cli.quotes_url {
        config = config.with_quotes_url(url.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    Ok(config)
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("quotebar"))
}

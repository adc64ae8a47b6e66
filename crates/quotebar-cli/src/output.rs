use std::io::Write;

use quotebar_core::{quote_range_bar, MarketIndex, MarketSnapshot, StockQuote};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct Report<'a> {
    market: &'a MarketSnapshot,
    quotes: &'a [StockQuote],
}

pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    market: &MarketSnapshot,
    quotes: &[StockQuote],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => render_text(out, market, quotes)?,
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&Report { market, quotes })?;
            writeln!(out, "{payload}")?;
        }
    }

    Ok(())
}

fn render_text<W: Write>(
    out: &mut W,
    market: &MarketSnapshot,
    quotes: &[StockQuote],
) -> std::io::Result<()> {
    let header = MarketIndex::ALL
        .iter()
        .map(|index| {
            let entry = market.index(*index);
            format!(
                "{}\t{} ({}/{})",
                index.label(),
                entry.latest,
                entry.change,
                entry.percent
            )
        })
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header}")?;

    for quote in quotes {
        writeln!(
            out,
            "{}\t{} ({}/{}%) on {} shares",
            quote.ticker, quote.last_trade, quote.change, quote.change_pct, quote.volume
        )?;
        writeln!(
            out,
            "\t52-wk: {}{}{}",
            quote.low52,
            quote_range_bar(quote),
            quote.high52
        )?;
    }

    Ok(())
}

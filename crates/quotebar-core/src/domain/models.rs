use serde::Serialize;

use crate::normalize::{field, parse_display_number, DisplayFields};

/// Per-ticker quote with every price-like field kept as a display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockQuote {
    pub ticker: String,
    pub last_trade: String,
    pub change: String,
    pub change_pct: String,
    pub open: String,
    pub low: String,
    pub high: String,
    pub low52: String,
    pub high52: String,
    pub volume: String,
    pub avg_volume: String,
    pub pe_ratio: String,
    pub dividend: String,
    pub yield_pct: String,
    pub market_cap: String,
    pub currency: String,
    /// True when `change` parses and is >= 0.
    pub advancing: bool,
}

impl StockQuote {
    /// Build a quote from one normalized provider result object.
    pub fn from_display_fields(fields: &DisplayFields) -> Self {
        let change = field(fields, "regularMarketChange");
        let advancing = parse_display_number(&change).is_some_and(|value| value >= 0.0);

        Self {
            ticker: field(fields, "symbol"),
            last_trade: field(fields, "regularMarketPrice"),
            change,
            change_pct: field(fields, "regularMarketChangePercent"),
            open: field(fields, "regularMarketOpen"),
            low: field(fields, "regularMarketDayLow"),
            high: field(fields, "regularMarketDayHigh"),
            low52: field(fields, "fiftyTwoWeekLow"),
            high52: field(fields, "fiftyTwoWeekHigh"),
            volume: field(fields, "regularMarketVolume"),
            avg_volume: field(fields, "averageDailyVolume10Day"),
            pe_ratio: field(fields, "trailingPE"),
            dividend: field(fields, "trailingAnnualDividendRate"),
            yield_pct: field(fields, "trailingAnnualDividendYield"),
            market_cap: field(fields, "marketCap"),
            currency: field(fields, "currency"),
            advancing,
        }
    }
}

/// Latest level of one market index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexQuote {
    pub latest: String,
    pub change: String,
    pub percent: String,
}

impl IndexQuote {
    pub fn from_display_fields(fields: &DisplayFields) -> Self {
        Self {
            latest: field(fields, "regularMarketPrice"),
            change: field(fields, "regularMarketChange"),
            percent: field(fields, "regularMarketChangePercent"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.change.is_empty() && self.percent.is_empty()
    }
}

/// The fixed set of indices shown in the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketIndex {
    Dow,
    Nasdaq,
    Sp500,
}

impl MarketIndex {
    pub const ALL: [MarketIndex; 3] = [Self::Dow, Self::Nasdaq, Self::Sp500];

    /// Provider symbol for the index.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Dow => "^DJI",
            Self::Nasdaq => "^IXIC",
            Self::Sp500 => "^GSPC",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dow => "DOW",
            Self::Nasdaq => "Nasdaq",
            Self::Sp500 => "S&P 500",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|index| index.symbol().eq_ignore_ascii_case(symbol))
    }
}

/// Index levels plus the open/closed flag, captured once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarketSnapshot {
    pub dow: IndexQuote,
    pub nasdaq: IndexQuote,
    pub sp500: IndexQuote,
    pub is_closed: bool,
}

impl MarketSnapshot {
    pub fn index(&self, index: MarketIndex) -> &IndexQuote {
        match index {
            MarketIndex::Dow => &self.dow,
            MarketIndex::Nasdaq => &self.nasdaq,
            MarketIndex::Sp500 => &self.sp500,
        }
    }

    pub(crate) fn index_mut(&mut self, index: MarketIndex) -> &mut IndexQuote {
        match index {
            MarketIndex::Dow => &mut self.dow,
            MarketIndex::Nasdaq => &mut self.nasdaq,
            MarketIndex::Sp500 => &mut self.sp500,
        }
    }
}

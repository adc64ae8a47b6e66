//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockQuote`] | Per-ticker quote, every field a display string |
//! | [`MarketSnapshot`] | Index levels and the market open/closed flag |
//! | [`IndexQuote`] | One index entry inside a snapshot |
//! | [`MarketIndex`] | The fixed index set (Dow, Nasdaq, S&P 500) |
//! | [`Symbol`] | Validated ticker symbol |

mod models;
mod symbol;

pub use models::{IndexQuote, MarketIndex, MarketSnapshot, StockQuote};
pub use symbol::Symbol;

//! 52-week range bar.
//!
//! The trailing-year low/high window is compressed into [`BAR_WIDTH`] slots
//! and the last trade is marked with `*`:
//!
//! ```text
//! low52 .........................*........................ high52
//! ```

use crate::normalize::parse_display_number;
use crate::StockQuote;

/// Number of slots in the rendered bar.
pub const BAR_WIDTH: usize = 50;

const EMPTY_SLOT: char = '.';
const MARKER: char = '*';

/// Slot index of `last` inside the `[low, high]` window.
///
/// Prices above the high clamp to the last slot and prices below the low
/// clamp to the first. An inverted window (`high < low`) is not rejected: the
/// same ratio is applied, so a price halfway between still lands mid-bar.
/// Returns `None` when the window is empty or any input is not finite.
pub fn range_position(low: f64, high: f64, last: f64) -> Option<usize> {
    if !(low.is_finite() && high.is_finite() && last.is_finite()) || high == low {
        return None;
    }

    let position = ((last - low) / (high - low) * 100.0 / 2.0).round();
    if !position.is_finite() {
        return None;
    }
    let max = (BAR_WIDTH - 1) as f64;
    Some(position.clamp(0.0, max) as usize)
}

/// Render the bar from the display strings of a quote.
///
/// Anything unparsable renders a bar of dots with no marker.
pub fn range_bar(low52: &str, high52: &str, last: &str) -> String {
    let position = match (
        parse_display_number(low52),
        parse_display_number(high52),
        parse_display_number(last),
    ) {
        (Some(low), Some(high), Some(last)) => range_position(low, high, last),
        _ => None,
    };

    (0..BAR_WIDTH)
        .map(|slot| {
            if Some(slot) == position {
                MARKER
            } else {
                EMPTY_SLOT
            }
        })
        .collect()
}

/// Bar for a parsed quote.
pub fn quote_range_bar(quote: &StockQuote) -> String {
    range_bar(&quote.low52, &quote.high52, &quote.last_trade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_index(bar: &str) -> Option<usize> {
        bar.find(MARKER)
    }

    #[test]
    fn midpoint_lands_on_slot_25() {
        assert_eq!(range_position(100.0, 200.0, 150.0), Some(25));

        let bar = range_bar("100", "200", "150");
        assert_eq!(bar.len(), BAR_WIDTH);
        assert_eq!(marker_index(&bar), Some(25));
        assert_eq!(bar.chars().filter(|ch| *ch == EMPTY_SLOT).count(), BAR_WIDTH - 1);
    }

    #[test]
    fn price_at_or_above_high_clamps_to_last_slot() {
        assert_eq!(range_position(100.0, 200.0, 200.0), Some(49));
        assert_eq!(range_position(100.0, 200.0, 500.0), Some(49));
    }

    #[test]
    fn price_below_low_clamps_to_first_slot() {
        assert_eq!(range_position(100.0, 200.0, 100.0), Some(0));
        assert_eq!(range_position(100.0, 200.0, 40.0), Some(0));
        assert_eq!(marker_index(&range_bar("100", "200", "40")), Some(0));
    }

    #[test]
    fn half_slots_round_away_from_zero() {
        // 101 -> 0.5 slots
        assert_eq!(range_position(100.0, 200.0, 101.0), Some(1));
    }

    #[test]
    fn degenerate_window_renders_plain_dots() {
        assert_eq!(range_position(150.0, 150.0, 150.0), None);
        assert_eq!(range_position(150.0, 150.0, 90.0), None);

        let bar = range_bar("150", "150", "150");
        assert_eq!(bar, ".".repeat(BAR_WIDTH));
    }

    #[test]
    fn inverted_window_still_places_the_marker() {
        // low and high swapped by the provider
        assert_eq!(range_position(200.0, 100.0, 150.0), Some(25));
        assert_eq!(range_position(200.0, 100.0, 120.0), Some(40));
        assert_eq!(range_position(200.0, 100.0, 250.0), Some(0));
        assert_eq!(marker_index(&range_bar("200", "100", "150")), Some(25));
    }

    #[test]
    fn unparsable_inputs_render_plain_dots() {
        assert_eq!(range_bar("", "200", "150"), ".".repeat(BAR_WIDTH));
        assert_eq!(range_bar("100", "1.2K", "150"), ".".repeat(BAR_WIDTH));
        assert_eq!(range_bar("100", "200", "n/a"), ".".repeat(BAR_WIDTH));
    }

    #[test]
    fn quote_bar_uses_52_week_fields() {
        let quote = StockQuote {
            low52: String::from("10.000"),
            high52: String::from("20.000"),
            last_trade: String::from("12.000"),
            ..StockQuote::default()
        };
        assert_eq!(marker_index(&quote_range_bar(&quote)), Some(10));
    }
}

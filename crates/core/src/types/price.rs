//! Price display.
//!
//! Product prices are plain decimal amounts in dollars. They are only turned
//! into text for display, always with a `$` and two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount for display (e.g., "$29.99").
///
/// Rounds half away from zero. No thousands separators are added.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

//! Type-safe price representation using decimal arithmetic.
//!
//! All money in the cart is [`Decimal`]; floating point never touches an
//! amount, so `subtotal + tax == total` holds exactly.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol prefixed to every displayed amount. The shop trades in USD only.
pub const CURRENCY_SYMBOL: &str = "$";

/// A displayable USD price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in US dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{}", format_amount(self.amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format an amount with exactly two decimal places.
///
/// Rounds half away from zero, the way receipts are printed.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

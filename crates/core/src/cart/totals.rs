//! Money aggregates derived from the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartLineItem;

/// Sales tax applied at checkout (8%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Subtotal, tax and total for a set of line items.
///
/// Never stored: always recomputed from the lines so the figures cannot
/// drift from the cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    /// `Σ(price × quantity)`.
    pub subtotal: Decimal,
    /// `subtotal × tax rate`.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals for `items` at `tax_rate`.
    ///
    /// Returns `None` if any step leaves `Decimal` range.
    #[must_use]
    pub fn compute(items: &[CartLineItem], tax_rate: Decimal) -> Option<Self> {
        let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, line| {
            acc.checked_add(line.line_total()?)
        })?;
        let tax = subtotal.checked_mul(tax_rate)?;
        let total = subtotal.checked_add(tax)?;

        Some(Self {
            subtotal,
            tax,
            total,
        })
    }
}

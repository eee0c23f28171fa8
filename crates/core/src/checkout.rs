//! Checkout completion.
//!
//! A submission succeeds only if every field passes and the cart has at
//! least one line. On success the cart is cleared (and therefore persisted
//! and listeners notified) and the caller gets a receipt to display. No
//! payment is taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::cart::{CartLineItem, CartStore, CartTotals};
use crate::storage::KeyValueStore;
use crate::validation::{CheckoutField, FormReport, validate_checkout_form};

/// Proof of a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Locally generated order reference.
    pub order_id: Uuid,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Lines as they were at checkout.
    pub items: Vec<CartLineItem>,
    /// Totals as they were at checkout.
    pub totals: CartTotals,
}

/// Why a checkout did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRejection {
    /// Per-field results, always complete.
    pub report: FormReport,
    /// True when the cart had no lines.
    pub empty_cart: bool,
}

/// Result of submitting the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was placed and the cart cleared.
    Completed(CheckoutReceipt),
    /// Nothing changed.
    Rejected(CheckoutRejection),
}

impl CheckoutOutcome {
    /// Whether the order was placed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Validate `fields` and, if the cart is non-empty, place the order.
    #[instrument(level = "debug", skip_all, fields(fields = fields.len()))]
    pub fn checkout(&mut self, fields: &[CheckoutField]) -> CheckoutOutcome {
        let report = validate_checkout_form(fields);
        let empty_cart = self.is_empty();

        if empty_cart || !report.is_valid() {
            info!(
                empty_cart,
                invalid_fields = report.errors().count(),
                "Checkout rejected"
            );
            return CheckoutOutcome::Rejected(CheckoutRejection { report, empty_cart });
        }

        let receipt = CheckoutReceipt {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            items: self.items().to_vec(),
            totals: self.aggregates(),
        };
        self.clear();

        info!(order_id = %receipt.order_id, total = %receipt.totals.total, "Order placed");
        CheckoutOutcome::Completed(receipt)
    }
}

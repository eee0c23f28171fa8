//! Cart change notifications.
//!
//! The store never talks to a UI. Front ends register a [`CartListener`]
//! and redraw whatever they show (badge, rows, totals, a toast) from the
//! event and snapshot they receive.

use std::time::Duration;

use super::CartTotals;
use crate::types::ProductId;

/// How long an "added to cart" notice stays on screen.
pub const CONFIRMATION_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, either as a new line or one more unit.
    ItemAdded {
        /// Product added.
        product_id: ProductId,
        /// Product title, for the confirmation notice.
        title: String,
        /// Line quantity after the add.
        quantity: u32,
    },
    /// A line was removed (or a removal of an absent line was requested).
    ItemRemoved {
        /// Product removed.
        product_id: ProductId,
    },
    /// A line quantity was overwritten.
    QuantityChanged {
        /// Product updated.
        product_id: ProductId,
        /// New line quantity.
        quantity: u32,
    },
    /// Every line was removed.
    Cleared,
}

impl CartEvent {
    /// The transient notice to show for this event, if any.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        match self {
            Self::ItemAdded { title, .. } => Some(Confirmation {
                message: format!("{title} added to cart!"),
                dismiss_after: CONFIRMATION_DISMISS_AFTER,
            }),
            _ => None,
        }
    }
}

/// A short-lived user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Text to display.
    pub message: String,
    /// When to hide it. Purely cosmetic.
    pub dismiss_after: Duration,
}

/// Cart figures at the moment an event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Total units across all lines.
    pub item_count: u64,
    /// Money aggregates.
    pub totals: CartTotals,
}

impl CartSnapshot {
    /// Whether the cart count badge should be shown.
    #[must_use]
    pub const fn badge_visible(&self) -> bool {
        self.item_count > 0
    }
}

/// Receives cart change notifications.
pub trait CartListener {
    /// Called after every mutation, once the cart has been persisted.
    fn on_cart_event(&self, event: &CartEvent, snapshot: &CartSnapshot);
}

impl<F> CartListener for F
where
    F: Fn(&CartEvent, &CartSnapshot),
{
    fn on_cart_event(&self, event: &CartEvent, snapshot: &CartSnapshot) {
        self(event, snapshot);
    }
}

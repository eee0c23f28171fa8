//! The cart store.
//!
//! [`CartStore`] owns the line items and is the only way to change them.
//! Every mutation runs to completion synchronously, writes the cart to the
//! key-value store under [`CART_STORAGE_KEY`], and then notifies listeners.
//!
//! # Failure model
//!
//! Nothing in here is fatal:
//! - unknown product IDs are ignored
//! - an absent or corrupt persisted cart restores as an empty cart
//! - a failed storage write is logged and the in-memory cart is kept
//!
//! Line prices are bounded by [`MAX_UNIT_PRICE`] and the tax rate by
//! `0..=1`, which keeps every total the store can reach inside `Decimal`
//! range.

mod events;
mod line_item;
mod policy;
mod totals;

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::catalog::{Catalog, MAX_UNIT_PRICE};
use crate::storage::{CART_STORAGE_KEY, KeyValueStore, StorageError};
use crate::types::ProductId;

pub use events::{
    CONFIRMATION_DISMISS_AFTER, CartEvent, CartListener, CartSnapshot, Confirmation,
};
pub use line_item::CartLineItem;
pub use policy::QuantityPolicy;
pub use totals::{CartTotals, DEFAULT_TAX_RATE};

/// Errors surfaced by cart operations that take raw user input.
#[derive(Debug, Error)]
pub enum CartError {
    /// A typed quantity was not a whole number.
    #[error("invalid quantity {input:?}: expected a whole number")]
    InvalidQuantity {
        /// The rejected input.
        input: String,
    },
}

/// Owned cart state backed by a durable key-value store.
pub struct CartStore<S: KeyValueStore> {
    catalog: Catalog,
    items: Vec<CartLineItem>,
    storage: S,
    policy: QuantityPolicy,
    tax_rate: Decimal,
    listeners: Vec<Box<dyn CartListener>>,
}

impl<S: KeyValueStore> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("policy", &self.policy)
            .field("tax_rate", &self.tax_rate)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store with explicit initial lines.
    ///
    /// Lines are normalized: zero-quantity lines and lines priced outside
    /// `0..=MAX_UNIT_PRICE` are dropped, and repeated product IDs are merged
    /// into the first occurrence.
    #[must_use]
    pub fn new(catalog: Catalog, storage: S, items: Vec<CartLineItem>) -> Self {
        Self {
            catalog,
            items: normalize_lines(items),
            storage,
            policy: QuantityPolicy::default(),
            tax_rate: DEFAULT_TAX_RATE,
            listeners: Vec::new(),
        }
    }

    /// Create a store from whatever cart was persisted in `storage`.
    ///
    /// A missing key, a read failure or unparseable JSON all yield an
    /// empty cart.
    #[must_use]
    pub fn restore(catalog: Catalog, storage: S) -> Self {
        let items = load_lines(&storage);
        debug!(lines = items.len(), "Restored cart");
        Self::new(catalog, storage, items)
    }

    /// Replace the quantity policy.
    ///
    /// Existing lines above the new limit are clamped down to it.
    #[must_use]
    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        for line in &mut self.items {
            let allowed = policy.clamp(u64::from(line.quantity));
            if allowed < line.quantity {
                debug!(
                    product_id = %line.id,
                    from = line.quantity,
                    to = allowed,
                    "Clamped line to policy limit"
                );
                line.quantity = allowed;
            }
        }
        self.policy = policy;
        self
    }

    /// Replace the tax rate (e.g. `0.08` for 8%).
    ///
    /// Rates outside `0..=1` are clamped into range.
    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        let clamped = tax_rate.clamp(Decimal::ZERO, Decimal::ONE);
        if clamped != tax_rate {
            warn!(%tax_rate, %clamped, "Tax rate out of range, clamping");
        }
        self.tax_rate = clamped;
        self
    }

    /// Register a listener for every subsequent mutation.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: CartListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a catalog product.
    ///
    /// Unknown IDs are ignored without persisting or notifying. So is a
    /// line already at the policy limit.
    #[instrument(level = "debug", skip(self))]
    pub fn add_item(&mut self, product_id: ProductId) {
        let Some(product) = self.catalog.get(product_id) else {
            debug!(%product_id, "Ignoring add for unknown product");
            return;
        };
        let title = product.title.clone();

        let quantity = if let Some(line) = self.items.iter_mut().find(|l| l.id == product_id) {
            let next = self.policy.clamp(u64::from(line.quantity) + 1);
            if next <= line.quantity {
                debug!(%product_id, quantity = line.quantity, "Line already at limit");
                return;
            }
            line.quantity = next;
            next
        } else {
            let line = CartLineItem::from_product(product, self.policy.clamp(1));
            let quantity = line.quantity;
            self.items.push(line);
            quantity
        };

        self.commit(&CartEvent::ItemAdded {
            product_id,
            title,
            quantity,
        });
    }

    /// Remove the line for `product_id`, if any.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|line| line.id != product_id);
        self.commit(&CartEvent::ItemRemoved { product_id });
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Quantities above the
    /// policy limit are clamped. Absent lines are left alone.
    #[instrument(level = "debug", skip(self))]
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        let Ok(requested) = u64::try_from(new_quantity) else {
            self.remove_item(product_id);
            return;
        };
        if requested == 0 {
            self.remove_item(product_id);
            return;
        }

        let allowed = self.policy.clamp(requested);
        let Some(line) = self.items.iter_mut().find(|l| l.id == product_id) else {
            debug!(%product_id, "Ignoring quantity update for product not in cart");
            return;
        };
        if u64::from(allowed) < requested {
            debug!(%product_id, requested, allowed, "Clamped quantity to policy limit");
        }
        line.quantity = allowed;

        self.commit(&CartEvent::QuantityChanged {
            product_id,
            quantity: allowed,
        });
    }

    /// Parse a typed quantity and apply it with [`Self::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `raw` is not a whole
    /// number; the cart is left unchanged.
    pub fn update_quantity_input(
        &mut self,
        product_id: ProductId,
        raw: &str,
    ) -> Result<(), CartError> {
        let quantity = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| CartError::InvalidQuantity {
                input: raw.to_owned(),
            })?;
        self.update_quantity(product_id, quantity);
        Ok(())
    }

    /// Remove every line.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit(&CartEvent::Cleared);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Subtotal, tax and total for the current lines.
    #[must_use]
    pub fn aggregates(&self) -> CartTotals {
        CartTotals::compute(&self.items, self.tax_rate).unwrap_or_else(|| {
            // Unreachable while prices and tax rate stay bounded.
            error!(lines = self.items.len(), "Cart totals out of range");
            CartTotals::default()
        })
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether the cart count badge should be shown.
    #[must_use]
    pub fn badge_visible(&self) -> bool {
        self.item_count() > 0
    }

    /// Count and totals together.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            item_count: self.item_count(),
            totals: self.aggregates(),
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id == product_id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The catalog products are added from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active quantity policy.
    #[must_use]
    pub const fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// The active tax rate.
    #[must_use]
    pub const fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and hand back its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the current lines to storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the backend write fails.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(CART_STORAGE_KEY, &json)
    }

    fn commit(&mut self, event: &CartEvent) {
        if let Err(e) = self.persist() {
            error!(error = %e, "Failed to persist cart");
        }

        let snapshot = self.snapshot();
        debug!(?event, item_count = snapshot.item_count, "Cart updated");
        for listener in &self.listeners {
            listener.on_cart_event(event, &snapshot);
        }
    }
}

/// Read persisted lines, treating every failure as an empty cart.
fn load_lines<S: KeyValueStore>(storage: &S) -> Vec<CartLineItem> {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "Persisted cart is corrupt, starting empty");
        Vec::new()
    })
}

/// Enforce one line per product, a quantity of at least one and a
/// bounded unit price.
fn normalize_lines(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut lines: Vec<CartLineItem> = Vec::with_capacity(items.len());

    for item in items {
        if item.quantity == 0 {
            warn!(product_id = %item.id, "Dropping cart line with zero quantity");
            continue;
        }
        if item.price < Decimal::ZERO || item.price > MAX_UNIT_PRICE {
            warn!(
                product_id = %item.id,
                price = %item.price,
                "Dropping cart line with out-of-range price"
            );
            continue;
        }
        if let Some(existing) = lines.iter_mut().find(|l| l.id == item.id) {
            warn!(product_id = %item.id, "Merging duplicate cart line");
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            lines.push(item);
        }
    }

    lines
}

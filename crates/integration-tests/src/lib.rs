//! Integration tests for the ecommerce cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ecommerce-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Add/remove/update sequences and their aggregates
//! - `persistence` - Persist and restore through the key-value store
//! - `checkout` - Form validation and checkout completion

use ecommerce_cart_core::{CartStore, Catalog, KeyValueStore, Product, ProductId};
use rust_decimal::Decimal;

/// A catalog with one product per `(id, cents)` pair.
///
/// # Panics
///
/// Panics if the pairs contain duplicate or non-positive IDs.
#[must_use]
#[allow(clippy::expect_used)]
pub fn catalog_of(prices: &[(i32, i64)]) -> Catalog {
    let products = prices
        .iter()
        .map(|&(id, cents)| Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::new(cents, 2),
            image: "📦".to_string(),
            description: format!("Test product {id}"),
        })
        .collect();
    Catalog::new(products).expect("test catalog should be valid")
}

/// One user action against the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(i32),
    Remove(i32),
    Update(i32, i64),
    Clear,
}

impl CartOp {
    /// Apply the action to `store`.
    pub fn apply<S: KeyValueStore>(self, store: &mut CartStore<S>) {
        match self {
            Self::Add(id) => store.add_item(ProductId::new(id)),
            Self::Remove(id) => store.remove_item(ProductId::new(id)),
            Self::Update(id, quantity) => store.update_quantity(ProductId::new(id), quantity),
            Self::Clear => store.clear(),
        }
    }
}

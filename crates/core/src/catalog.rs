//! The product catalog.
//!
//! The catalog is a fixed, ordered list of products loaded once at startup
//! and never mutated afterwards. It comes either from [`Catalog::builtin`]
//! or from a JSON/YAML document supplied by the caller.
//!
//! ## Document Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Wireless Bluetooth Headphones",
//!     "price": 79.99,
//!     "image": "🎧",
//!     "description": "High-quality wireless headphones..."
//!   }
//! ]
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProductId;

/// Highest unit price a product may carry (one million).
///
/// Keeps every reachable cart total inside `Decimal` range.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an ID.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product ID is zero or negative.
    #[error("product id {0} must be positive")]
    NonPositiveId(ProductId),

    /// A product price is below zero.
    #[error("product {id} has negative price {price}")]
    NegativePrice {
        /// Offending product.
        id: ProductId,
        /// The rejected price.
        price: Decimal,
    },

    /// A product price is above [`MAX_UNIT_PRICE`].
    #[error("product {id} price {price} exceeds the maximum of {max}", max = MAX_UNIT_PRICE)]
    PriceTooHigh {
        /// Offending product.
        id: ProductId,
        /// The rejected price.
        price: Decimal,
    },

    /// A product title is empty or whitespace.
    #[error("product {0} has an empty title")]
    EmptyTitle(ProductId),

    /// The document could not be parsed.
    #[error("catalog parsing failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price in currency units.
    pub price: Decimal,
    /// Display glyph or image URL.
    pub image: String,
    /// Marketing copy.
    pub description: String,
}

/// The read-only, ordered product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, checking every record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on duplicate or non-positive IDs, prices
    /// outside `0..=MAX_UNIT_PRICE` or blank titles.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !product.id.is_positive() {
                return Err(CatalogError::NonPositiveId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if product.price > MAX_UNIT_PRICE {
                return Err(CatalogError::PriceTooHigh {
                    id: product.id,
                    price: product.price,
                });
            }
            if product.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any of the
    /// record errors from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The demo catalog shipped with the shop.
    #[must_use]
    pub fn builtin() -> Self {
        let product = |id, title: &str, cents, image: &str, description: &str| Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            price: Decimal::new(cents, 2),
            image: image.to_owned(),
            description: description.to_owned(),
        };

        Self {
            products: vec![
                product(
                    1,
                    "Wireless Bluetooth Headphones",
                    7999,
                    "🎧",
                    "High-quality wireless headphones with noise cancellation and 20-hour battery life.",
                ),
                product(
                    2,
                    "Smart Fitness Watch",
                    19999,
                    "⌚",
                    "Track your fitness goals with GPS, heart rate monitor, and waterproof design.",
                ),
                product(
                    3,
                    "Portable Phone Charger",
                    2999,
                    "🔋",
                    "10,000mAh power bank with fast charging and multiple USB ports.",
                ),
                product(
                    4,
                    "Wireless Gaming Mouse",
                    4999,
                    "🖱️",
                    "Precision gaming mouse with RGB lighting and programmable buttons.",
                ),
                product(
                    5,
                    "Bluetooth Speaker",
                    8999,
                    "🔊",
                    "Portable waterproof speaker with 360-degree sound and 12-hour battery.",
                ),
                product(
                    6,
                    "USB-C Hub Adapter",
                    3999,
                    "🔌",
                    "7-in-1 USB-C hub with HDMI, USB 3.0, SD card reader, and PD charging.",
                ),
                product(
                    7,
                    "Wireless Phone Stand",
                    2499,
                    "📱",
                    "Adjustable wireless charging stand compatible with all Qi-enabled devices.",
                ),
                product(
                    8,
                    "Mechanical Keyboard",
                    12999,
                    "⌨️",
                    "RGB backlit mechanical keyboard with blue switches and aluminum frame.",
                ),
            ],
        }
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

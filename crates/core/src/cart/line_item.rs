//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::ProductId;

/// One entry in the cart.
///
/// Title, price and image are copied from the catalog when the line is
/// created, so later catalog changes never reprice an existing cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// The product this line refers to.
    pub id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Unit price at add time.
    pub price: Decimal,
    /// Product image at add time.
    pub image: String,
    /// Units in the cart, at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// `price × quantity`, or `None` if the product is out of `Decimal` range.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_copies_fields() {
        let product = Product {
            id: ProductId::new(3),
            title: "Portable Phone Charger".to_string(),
            price: Decimal::new(2999, 2),
            image: "🔋".to_string(),
            description: "not copied".to_string(),
        };
        let line = CartLineItem::from_product(&product, 1);
        assert_eq!(line.id, product.id);
        assert_eq!(line.title, product.title);
        assert_eq!(line.price, product.price);
        assert_eq!(line.image, product.image);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let line = CartLineItem {
            id: ProductId::new(1),
            title: "Headphones".to_string(),
            price: Decimal::new(7999, 2),
            image: "🎧".to_string(),
            quantity: 3,
        };
        assert_eq!(line.line_total(), Some(Decimal::new(23997, 2)));
    }

    #[test]
    fn test_line_total_overflow() {
        let line = CartLineItem {
            id: ProductId::new(1),
            title: "Too much".to_string(),
            price: Decimal::MAX,
            image: String::new(),
            quantity: 2,
        };
        assert_eq!(line.line_total(), None);
    }

    #[test]
    fn test_persisted_field_names() {
        let line = CartLineItem {
            id: ProductId::new(1),
            title: "Headphones".to_string(),
            price: Decimal::new(7999, 2),
            image: "🎧".to_string(),
            quantity: 2,
        };
        let value = serde_json::to_value(&line).unwrap_or_default();
        for field in ["id", "title", "price", "image", "quantity"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}

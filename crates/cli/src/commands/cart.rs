//! Cart commands.

use std::io::Write;

use ecommerce_cart_core::{KeyValueStore, ProductId};
use tracing::info;

use super::Shell;
use crate::error::CliError;
use crate::render;

impl<S: KeyValueStore> Shell<S> {
    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn add(&mut self, out: &mut impl Write, product_id: ProductId) -> Result<(), CliError> {
        if self.store.catalog().get(product_id).is_none() {
            writeln!(out, "No product with id {product_id}")?;
        }
        self.store.add_item(product_id);

        self.flush_notices(out)?;
        render::badge(out, self.store.item_count())?;
        Ok(())
    }

    /// Remove a product's line.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn remove(&mut self, out: &mut impl Write, product_id: ProductId) -> Result<(), CliError> {
        self.store.remove_item(product_id);
        self.show(out)
    }

    /// Set a product's quantity from typed input.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Cart`] if `quantity` is not a whole number.
    pub fn update(
        &mut self,
        out: &mut impl Write,
        product_id: ProductId,
        quantity: &str,
    ) -> Result<(), CliError> {
        if self.store.line(product_id).is_none() {
            writeln!(out, "Product {product_id} is not in the cart")?;
        }
        self.store.update_quantity_input(product_id, quantity)?;
        self.show(out)
    }

    /// Print cart rows, totals and the badge.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn show(&self, out: &mut impl Write) -> Result<(), CliError> {
        render::cart_items(out, self.store.items())?;
        if !self.store.is_empty() {
            render::totals(out, &self.store.aggregates())?;
        }
        render::badge(out, self.store.item_count())?;
        Ok(())
    }

    /// Print the number of units in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn count(&self, out: &mut impl Write) -> Result<(), CliError> {
        writeln!(out, "{}", self.store.item_count())?;
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn clear(&mut self, out: &mut impl Write) -> Result<(), CliError> {
        self.store.clear();
        info!("Cart cleared");
        self.show(out)
    }
}

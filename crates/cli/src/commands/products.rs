//! Catalog listing.

use std::io::Write;

use ecommerce_cart_core::KeyValueStore;

use super::Shell;
use crate::error::CliError;
use crate::render;

impl<S: KeyValueStore> Shell<S> {
    /// List every product in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    pub fn products(&self, out: &mut impl Write) -> Result<(), CliError> {
        render::catalog(out, self.store.catalog())?;
        render::badge(out, self.store.item_count())?;
        Ok(())
    }
}

//! Catalog loading for the CLI.

use std::path::Path;

use ecommerce_cart_core::{Catalog, Product};
use tracing::info;

use crate::error::CliError;

/// Load the catalog from `path`, or the built-in one when `None`.
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML, anything else as
/// JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let catalog = if is_yaml {
        let products: Vec<Product> = serde_yaml::from_str(&content)?;
        Catalog::new(products)?
    } else {
        Catalog::from_json(&content)?
    };

    info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

//! CLI error type.

use thiserror::Error;

use ecommerce_cart_core::{CartError, CatalogError, StorageError};

use crate::config::ConfigError;

/// Errors that end a CLI invocation with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file is invalid.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The cart file could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A cart operation rejected its input.
    #[error("{0}")]
    Cart(#[from] CartError),

    /// YAML parsing failed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The checkout form or cart did not pass.
    #[error("checkout rejected")]
    CheckoutRejected,
}

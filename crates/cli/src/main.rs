//! Ecommerce Cart CLI - browse the catalog, manage the cart, check out.
//!
//! # Usage
//!
//! ```bash
//! # List products
//! cart products
//!
//! # Add a product, then another unit of it
//! cart add 1
//! cart add 1
//!
//! # Change or drop a quantity
//! cart update 1 5
//! cart update 1 0
//!
//! # Show rows and totals
//! cart show
//!
//! # Place the order
//! cart checkout --first-name Ada --last-name Lovelace --email ada@example.com \
//!     --address "12 St James's Square" --city London --zip-code "SW1Y 4JH" \
//!     --card-number "4111 1111 1111 1111" --expiry-date 09/27 --cvv 123
//! ```
//!
//! The cart is kept in a JSON file between runs; see [`config`] for the
//! environment variables that control where.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ecommerce_cart_core::{CartStore, CheckoutForm, ProductId};
use tracing_subscriber::EnvFilter;

mod catalog;
mod commands;
mod config;
mod error;
mod render;
mod store;

use commands::Shell;
use commands::checkout::CheckoutArgs;
use config::{CliConfig, LogFormat};
use error::CliError;
use store::FileStore;

#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about = "Shopping cart on the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Add one unit of a product to the cart
    Add {
        /// Catalog product ID
        product_id: ProductId,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product ID
        product_id: ProductId,
    },
    /// Set the quantity of a product in the cart (0 or less removes it)
    Update {
        /// Catalog product ID
        product_id: ProductId,
        /// New quantity, a whole number
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Show cart rows and totals
    Show,
    /// Print the number of items in the cart
    Count,
    /// Empty the cart
    Clear,
    /// Validate checkout details and place the order
    Checkout(CheckoutArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    init_tracing(config.as_ref().map_or(LogFormat::default(), |c| c.log_format));

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(cli, &config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Install the tracing subscriber; logs go to stderr so stdout stays clean.
fn init_tracing(format: LogFormat) {
    // Defaults to warnings only if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    let catalog = catalog::load(config.catalog_path.as_deref())?;
    let storage = FileStore::open(&config.storage_path)?;
    let store = CartStore::restore(catalog, storage)
        .with_policy(config.quantity_policy)
        .with_tax_rate(config.tax_rate);
    let mut shell = Shell::new(store);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Products => shell.products(&mut out)?,
        Commands::Add { product_id } => shell.add(&mut out, product_id)?,
        Commands::Remove { product_id } => shell.remove(&mut out, product_id)?,
        Commands::Update {
            product_id,
            quantity,
        } => shell.update(&mut out, product_id, &quantity)?,
        Commands::Show => shell.show(&mut out)?,
        Commands::Count => shell.count(&mut out)?,
        Commands::Clear => shell.clear(&mut out)?,
        Commands::Checkout(args) => shell.checkout(&mut out, &CheckoutForm::from(args))?,
    }

    out.flush()?;
    Ok(())
}

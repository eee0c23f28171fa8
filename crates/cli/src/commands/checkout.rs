//! Checkout command.

use std::io::Write;

use clap::Args;
use ecommerce_cart_core::{CheckoutForm, CheckoutOutcome, KeyValueStore};
use tracing::warn;

use super::Shell;
use crate::error::CliError;
use crate::render;

/// Checkout form values. Every field is required.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub zip_code: String,
    /// Spaces between digit groups are allowed
    #[arg(long, default_value = "")]
    pub card_number: String,
    /// MM/YY
    #[arg(long, default_value = "")]
    pub expiry_date: String,
    #[arg(long, default_value = "")]
    pub cvv: String,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            address: args.address,
            city: args.city,
            zip_code: args.zip_code,
            card_number: args.card_number,
            expiry_date: args.expiry_date,
            cvv: args.cvv,
        }
    }
}

impl<S: KeyValueStore> Shell<S> {
    /// Validate the form and place the order.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::CheckoutRejected`] after printing the reasons if
    /// any field fails or the cart is empty.
    pub fn checkout(&mut self, out: &mut impl Write, form: &CheckoutForm) -> Result<(), CliError> {
        match self.store.checkout(&form.fields()) {
            CheckoutOutcome::Completed(receipt) => {
                render::receipt(out, &receipt)?;
                Ok(())
            }
            CheckoutOutcome::Rejected(rejection) => {
                render::form_errors(out, &rejection.report)?;
                if rejection.empty_cart {
                    writeln!(out, "Your cart is empty. Please add items before checkout.")?;
                }
                warn!(
                    empty_cart = rejection.empty_cart,
                    invalid_fields = rejection.report.errors().count(),
                    "Checkout rejected"
                );
                Err(CliError::CheckoutRejected)
            }
        }
    }
}

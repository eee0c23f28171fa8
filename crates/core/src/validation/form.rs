//! The standard checkout form.

use serde::{Deserialize, Serialize};

use super::{CheckoutField, FieldKind};

/// Values typed into the checkout dialog.
///
/// Every field is required. Field IDs match the form input IDs
/// (`firstName`, `cardNumber`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// The form as validator input, in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<CheckoutField> {
        vec![
            CheckoutField::required("firstName", &self.first_name, FieldKind::Text),
            CheckoutField::required("lastName", &self.last_name, FieldKind::Text),
            CheckoutField::required("email", &self.email, FieldKind::Email),
            CheckoutField::required("address", &self.address, FieldKind::Text),
            CheckoutField::required("city", &self.city, FieldKind::Text),
            CheckoutField::required("zipCode", &self.zip_code, FieldKind::Text),
            CheckoutField::required("cardNumber", &self.card_number, FieldKind::CardNumber),
            CheckoutField::required("expiryDate", &self.expiry_date, FieldKind::Expiry),
            CheckoutField::required("cvv", &self.cvv, FieldKind::Cvv),
        ]
    }
}

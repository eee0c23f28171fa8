//! Checkout form validation.
//!
//! Field predicates are pure functions over strings. [`validate_checkout_form`]
//! runs them against a list of [`CheckoutField`]s and reports a result for
//! every field, so a front end can clear stale errors on fields that now
//! pass as well as show the ones that fail.

mod form;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{Email, is_form_whitespace};

pub use form::CheckoutForm;

// ASCII digit classes on purpose: `\d` would accept any Unicode digit.
static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("Invalid regex"));
static EXPIRY_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("Invalid regex"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid regex"));

/// `local@domain.tld` shape check. Not RFC 5322.
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    Email::parse(s).is_ok()
}

/// 13 to 19 ASCII digits once all whitespace is removed. No Luhn check.
#[must_use]
pub fn is_valid_card_number(s: &str) -> bool {
    let cleaned: String = s.chars().filter(|&c| !is_form_whitespace(c)).collect();
    CARD_NUMBER_RE.is_match(&cleaned)
}

/// Exactly `MM/YY` with a month of 01-12. The date itself is not checked
/// against the calendar.
#[must_use]
pub fn is_valid_expiry_date(s: &str) -> bool {
    EXPIRY_DATE_RE.is_match(s)
}

/// 3 or 4 ASCII digits.
#[must_use]
pub fn is_valid_cvv(s: &str) -> bool {
    CVV_RE.is_match(s)
}

/// What a field holds, which decides the format check applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, presence check only.
    Text,
    /// An email address.
    Email,
    /// A payment card number.
    CardNumber,
    /// A card expiry date.
    Expiry,
    /// A card security code.
    Cvv,
}

impl FieldKind {
    /// The format error for a non-empty `value`, if it fails.
    #[must_use]
    pub fn check(self, value: &str) -> Option<FieldError> {
        let (valid, error) = match self {
            Self::Text => return None,
            Self::Email => (is_valid_email(value), FieldError::InvalidEmail),
            Self::CardNumber => (is_valid_card_number(value), FieldError::InvalidCardNumber),
            Self::Expiry => (is_valid_expiry_date(value), FieldError::InvalidExpiry),
            Self::Cvv => (is_valid_cvv(value), FieldError::InvalidCvv),
        };
        (!valid).then_some(error)
    }
}

/// Why a field failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// A required field was blank.
    #[error("This field is required")]
    Required,
    /// An email field failed the shape check.
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// A card number field was not 13-19 digits.
    #[error("Please enter a valid card number")]
    InvalidCardNumber,
    /// An expiry field was not `MM/YY`.
    #[error("Please enter a valid expiry date (MM/YY)")]
    InvalidExpiry,
    /// A CVV field was not 3 or 4 digits.
    #[error("Please enter a valid CVV")]
    InvalidCvv,
}

/// One form input submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutField {
    /// Identifier the result is reported under.
    pub id: String,
    /// Raw user input.
    pub value: String,
    /// Whether a blank value fails.
    pub required: bool,
    /// Format check to apply.
    pub kind: FieldKind,
}

impl CheckoutField {
    /// A field that must be filled in.
    #[must_use]
    pub fn required(id: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            required: true,
            kind,
        }
    }

    /// A field that may be left blank.
    #[must_use]
    pub fn optional(id: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            required: false,
            kind,
        }
    }

    /// Validate this field on its own.
    #[must_use]
    pub fn validate(&self) -> FieldResult {
        if self.value.trim_matches(is_form_whitespace).is_empty() {
            return if self.required {
                FieldResult::fail(FieldError::Required)
            } else {
                FieldResult::pass()
            };
        }

        self.kind
            .check(&self.value)
            .map_or_else(FieldResult::pass, FieldResult::fail)
    }
}

/// Outcome for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldResult {
    /// Whether the field passed.
    pub valid: bool,
    /// The failure reason when `valid` is false.
    pub reason: Option<FieldError>,
}

impl FieldResult {
    /// A passing result.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A failing result.
    #[must_use]
    pub const fn fail(reason: FieldError) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Results for every submitted field, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    results: Vec<(String, FieldResult)>,
}

impl FormReport {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.valid)
    }

    /// The result for a field ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldResult> {
        self.results
            .iter()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, result)| result)
    }

    /// All results, passing ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.results
            .iter()
            .map(|(id, result)| (id.as_str(), result))
    }

    /// Only the failing fields with their reasons.
    pub fn errors(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.results
            .iter()
            .filter_map(|(id, result)| result.reason.map(|reason| (id.as_str(), reason)))
    }

    /// Number of fields reported.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no fields were submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Validate every field, never stopping at the first failure.
#[must_use]
pub fn validate_checkout_form(fields: &[CheckoutField]) -> FormReport {
    FormReport {
        results: fields
            .iter()
            .map(|field| (field.id.clone(), field.validate()))
            .collect(),
    }
}

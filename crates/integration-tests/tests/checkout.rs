//! Integration tests for form validation and checkout.

use ecommerce_cart_core::validation::{
    is_valid_card_number, is_valid_cvv, is_valid_email, is_valid_expiry_date,
};
use ecommerce_cart_core::{
    CartStore, Catalog, CheckoutField, CheckoutForm, CheckoutOutcome, FieldError, FieldKind,
    MemoryStore, ProductId, validate_checkout_form,
};
use ecommerce_cart_integration_tests::catalog_of;
use rust_decimal::Decimal;

fn valid_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 St James's Square".to_string(),
        city: "London".to_string(),
        zip_code: "SW1Y 4JH".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiry_date: "09/27".to_string(),
        cvv: "123".to_string(),
    }
}

// =============================================================================
// Predicate Tests
// =============================================================================

#[test]
fn test_email_examples() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_card_number_examples() {
    assert!(is_valid_card_number("4111 1111 1111 1111"));
    assert!(is_valid_card_number("4111111111111"));
    assert!(is_valid_card_number("4111111111111111111"));
    assert!(!is_valid_card_number("411111111111"));
    assert!(!is_valid_card_number("41111111111111111111"));
    assert!(!is_valid_card_number("4111-1111-1111-1111"));
}

#[test]
fn test_expiry_examples() {
    assert!(is_valid_expiry_date("01/30"));
    assert!(is_valid_expiry_date("12/99"));
    assert!(!is_valid_expiry_date("13/25"));
    assert!(!is_valid_expiry_date("00/25"));
    assert!(!is_valid_expiry_date("1/25"));
    assert!(!is_valid_expiry_date("01/2025"));
}

#[test]
fn test_cvv_examples() {
    assert!(is_valid_cvv("123"));
    assert!(is_valid_cvv("1234"));
    assert!(!is_valid_cvv("12"));
    assert!(!is_valid_cvv("12345"));
    assert!(!is_valid_cvv("12a"));
}

// =============================================================================
// Form Tests
// =============================================================================

#[test]
fn test_report_covers_every_field() {
    let fields = vec![
        CheckoutField::required("name", "", FieldKind::Text),
        CheckoutField::required("email", "nope", FieldKind::Email),
        CheckoutField::optional("note", "", FieldKind::Text),
        CheckoutField::required("cvv", "999", FieldKind::Cvv),
    ];
    let report = validate_checkout_form(&fields);

    assert!(!report.is_valid());
    assert_eq!(report.len(), 4);
    assert_eq!(
        report.get("name").and_then(|r| r.reason),
        Some(FieldError::Required)
    );
    assert_eq!(
        report.get("email").and_then(|r| r.reason),
        Some(FieldError::InvalidEmail)
    );
    assert!(report.get("note").is_some_and(|r| r.valid));
    assert!(report.get("cvv").is_some_and(|r| r.valid));
}

#[test]
fn test_error_messages() {
    assert_eq!(FieldError::Required.to_string(), "This field is required");
    assert_eq!(
        FieldError::InvalidExpiry.to_string(),
        "Please enter a valid expiry date (MM/YY)"
    );
}

// =============================================================================
// Checkout Tests
// =============================================================================

#[test]
fn test_end_to_end_checkout() {
    let mut cart = CartStore::new(catalog_of(&[(1, 1000)]), MemoryStore::new(), Vec::new());
    cart.add_item(ProductId::new(1));
    cart.add_item(ProductId::new(1));

    let CheckoutOutcome::Completed(receipt) = cart.checkout(&valid_form().fields()) else {
        panic!("expected completed checkout");
    };

    assert_eq!(receipt.totals.subtotal, Decimal::new(2000, 2));
    assert_eq!(receipt.totals.tax, Decimal::new(160, 2));
    assert_eq!(receipt.totals.total, Decimal::new(2160, 2));
    assert_eq!(receipt.items[0].quantity, 2);
    assert!(cart.is_empty());
    assert!(!cart.badge_visible());

    let restored = CartStore::restore(Catalog::builtin(), cart.into_storage());
    assert!(restored.is_empty());
}

#[test]
fn test_empty_cart_checkout_rejected() {
    let mut cart = CartStore::new(Catalog::builtin(), MemoryStore::new(), Vec::new());

    let CheckoutOutcome::Rejected(rejection) = cart.checkout(&valid_form().fields()) else {
        panic!("expected rejection");
    };
    assert!(rejection.empty_cart);
}

#[test]
fn test_invalid_card_blocks_checkout() {
    let mut cart = CartStore::new(Catalog::builtin(), MemoryStore::new(), Vec::new());
    cart.add_item(ProductId::new(6));
    let mut form = valid_form();
    form.card_number = "1234".to_string();

    let outcome = cart.checkout(&form.fields());
    assert!(!outcome.is_completed());
    assert_eq!(cart.item_count(), 1);
}

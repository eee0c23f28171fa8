//! Integration tests for cart store mutations and aggregates.

use ecommerce_cart_core::{
    CART_STORAGE_KEY, CartStore, Catalog, CatalogError, DEFAULT_TAX_RATE, MAX_UNIT_PRICE,
    MemoryStore, Product, ProductId, QuantityPolicy,
};
use ecommerce_cart_integration_tests::{CartOp, catalog_of};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn empty_store(catalog: Catalog) -> CartStore<MemoryStore> {
    CartStore::new(catalog, MemoryStore::new(), Vec::new())
}

fn op_strategy() -> impl Strategy<Value = CartOp> {
    // IDs 0 and 9 are outside the built-in catalog on purpose.
    prop_oneof![
        4 => (0_i32..10).prop_map(CartOp::Add),
        1 => (0_i32..10).prop_map(CartOp::Remove),
        2 => ((0_i32..10), (-3_i64..50)).prop_map(|(id, q)| CartOp::Update(id, q)),
        1 => Just(CartOp::Clear),
    ]
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_ten_dollar_product_added_twice() {
    let mut cart = empty_store(catalog_of(&[(1, 1000)]));
    cart.add_item(ProductId::new(1));
    cart.add_item(ProductId::new(1));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);

    let totals = cart.aggregates();
    assert_eq!(totals.subtotal, Decimal::new(2000, 2));
    assert_eq!(totals.tax, Decimal::new(160, 2));
    assert_eq!(totals.total, Decimal::new(2160, 2));
}

#[test]
fn test_line_items_are_denormalized() {
    let mut cart = empty_store(catalog_of(&[(1, 1000)]));
    cart.add_item(ProductId::new(1));

    // A store with a repriced catalog, restored from the same storage, keeps
    // the price captured at add time.
    let storage = cart.into_storage();
    let repriced = CartStore::restore(catalog_of(&[(1, 5000)]), storage);
    assert_eq!(repriced.items()[0].price, Decimal::new(1000, 2));

    let mut repriced = repriced;
    repriced.add_item(ProductId::new(1));
    assert_eq!(repriced.items()[0].price, Decimal::new(1000, 2));
    assert_eq!(repriced.items()[0].quantity, 2);
}

#[test]
fn test_mixed_cart_totals() {
    let mut cart = empty_store(Catalog::builtin());
    cart.add_item(ProductId::new(1)); // 79.99
    cart.add_item(ProductId::new(3)); // 29.99
    cart.update_quantity(ProductId::new(3), 3);
    cart.add_item(ProductId::new(8)); // 129.99

    assert_eq!(cart.item_count(), 5);
    let totals = cart.aggregates();
    assert_eq!(totals.subtotal, Decimal::new(29995, 2));
    assert_eq!(totals.tax, Decimal::new(239_960, 4));
    assert_eq!(totals.total, Decimal::new(3_239_460, 4));
}

#[test]
fn test_unknown_ids_leave_cart_untouched() {
    let mut cart = empty_store(Catalog::builtin());
    cart.add_item(ProductId::new(2));
    let before = cart.items().to_vec();

    cart.add_item(ProductId::new(0));
    cart.add_item(ProductId::new(-1));
    cart.remove_item(ProductId::new(77));
    cart.update_quantity(ProductId::new(77), 4);

    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn test_quantity_limit_policy() {
    let max = std::num::NonZeroU32::new(2).unwrap_or(std::num::NonZeroU32::MIN);
    let mut cart = empty_store(Catalog::builtin()).with_policy(QuantityPolicy::with_max(max));

    for _ in 0..5 {
        cart.add_item(ProductId::new(4));
    }
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn test_add_never_shrinks_restored_line_over_limit() {
    let raw = r#"[{"id": 1, "title": "Headphones", "price": "79.99", "image": "🎧", "quantity": 5}]"#;
    let max = std::num::NonZeroU32::new(3).unwrap_or(std::num::NonZeroU32::MIN);
    let mut cart = CartStore::restore(
        Catalog::builtin(),
        MemoryStore::with_entry(CART_STORAGE_KEY, raw),
    )
    .with_policy(QuantityPolicy::with_max(max));
    let before = cart.item_count();

    cart.add_item(ProductId::new(1));
    assert!(cart.item_count() >= before);
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn test_catalog_rejects_price_that_would_overflow_totals() {
    let product = Product {
        id: ProductId::new(1),
        title: "Huge".to_string(),
        price: Decimal::from_str_exact("75000000000000000000000000000").unwrap_or(Decimal::MAX),
        image: String::new(),
        description: String::new(),
    };
    assert!(matches!(
        Catalog::new(vec![product]),
        Err(CatalogError::PriceTooHigh { .. })
    ));
}

#[test]
fn test_totals_at_maximum_price_do_not_panic() {
    let catalog = Catalog::new(vec![Product {
        id: ProductId::new(1),
        title: "Top shelf".to_string(),
        price: MAX_UNIT_PRICE,
        image: String::new(),
        description: String::new(),
    }])
    .unwrap_or_else(|_| Catalog::builtin());
    let mut cart = empty_store(catalog);
    cart.add_item(ProductId::new(1));
    cart.update_quantity(ProductId::new(1), i64::MAX);

    let totals = cart.aggregates();
    assert_eq!(totals.total, totals.subtotal + totals.tax);
    assert!(totals.subtotal > Decimal::ZERO);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn aggregates_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut cart = empty_store(Catalog::builtin());
        for op in ops {
            op.apply(&mut cart);

            let totals = cart.aggregates();
            prop_assert_eq!(totals.tax, totals.subtotal * DEFAULT_TAX_RATE);
            prop_assert_eq!(totals.total, totals.subtotal + totals.tax);

            let expected: Decimal = cart
                .items()
                .iter()
                .map(|line| line.price * Decimal::from(line.quantity))
                .sum();
            prop_assert_eq!(totals.subtotal, expected);
        }
    }

    #[test]
    fn lines_stay_unique_and_positive(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut cart = empty_store(Catalog::builtin());
        for op in ops {
            op.apply(&mut cart);
        }

        let mut ids: Vec<i32> = cart.items().iter().map(|l| l.id.as_i32()).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
        prop_assert!(cart.items().iter().all(|l| l.quantity >= 1));
        prop_assert!(cart.items().iter().all(|l| (1..=8).contains(&l.id.as_i32())));
    }

    #[test]
    fn update_to_zero_equals_remove(
        ops in prop::collection::vec(op_strategy(), 0..20),
        target in 1_i32..9,
    ) {
        let mut zeroed = empty_store(Catalog::builtin());
        let mut removed = empty_store(Catalog::builtin());
        for op in &ops {
            op.apply(&mut zeroed);
            op.apply(&mut removed);
        }

        zeroed.update_quantity(ProductId::new(target), 0);
        removed.remove_item(ProductId::new(target));
        prop_assert_eq!(zeroed.items(), removed.items());
    }
}

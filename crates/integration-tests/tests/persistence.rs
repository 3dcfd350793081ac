//! State survives a reload from the file store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use rust_decimal::Decimal;

use chapter_two_core::ProductId;
use chapter_two_integration_tests::TestContext;
use chapter_two_storefront::storage::keys;

#[test]
fn cart_survives_reload() {
    let mut ctx = TestContext::new().unwrap();
    {
        let mut state = ctx.open().unwrap();
        state
            .add_product_to_cart(ProductId::new(12), Some("#2D2D2D".into()), Some("M".into()))
            .unwrap();
        state
            .add_product_to_cart(ProductId::new(12), Some("#2D2D2D".into()), Some("M".into()))
            .unwrap();
        state
            .add_product_to_cart(ProductId::new(7), None, None)
            .unwrap();
    }

    let state = ctx.open().unwrap();
    let cart = state.cart();
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.item_count(), 3);
    // 2 x 1,999 + 2,499
    assert_eq!(cart.total(), Decimal::from(6_497));
    assert_eq!(cart.total_price().to_string(), "₹6,497");
    // Visibility is not persisted.
    assert!(!cart.is_open());
}

#[test]
fn stored_cart_uses_camel_case_fields() {
    let mut ctx = TestContext::new().unwrap();
    {
        let mut state = ctx.open().unwrap();
        state
            .add_product_to_cart(ProductId::new(10), Some("#2D2D2D".into()), Some("L".into()))
            .unwrap();
    }

    let raw = fs::read_to_string(ctx.file_for(keys::CART)).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let line = &stored[0];
    assert_eq!(line["id"], 10);
    assert_eq!(line["selectedColor"], "#2D2D2D");
    assert_eq!(line["selectedSize"], "L");
    assert_eq!(line["quantity"], 1);
    assert_eq!(line["price"], "₹7,999");
}

#[test]
fn corrupted_cart_falls_back_to_empty() {
    let mut ctx = TestContext::new().unwrap();
    fs::write(ctx.file_for(keys::CART), "{not json").unwrap();

    let mut state = ctx.open().unwrap();
    assert_eq!(state.cart().item_count(), 0);
    assert_eq!(state.cart().total(), Decimal::ZERO);
    assert!(!ctx.file_for(keys::CART).exists());

    // The container keeps working after discarding the payload.
    state
        .add_product_to_cart(ProductId::new(9), None, None)
        .unwrap();
    assert_eq!(state.cart().item_count(), 1);
}

#[test]
fn stored_lines_with_zero_quantity_are_dropped() {
    let mut ctx = TestContext::new().unwrap();
    let stored = r#"[
        {"id":12,"name":"Embroidered Baseball Cap","price":"₹1,999","image":"","category":"Caps","quantity":0},
        {"id":7,"name":"Classic Crewneck T-Shirt","price":"₹2,499","image":"","category":"T-shirts","quantity":2}
    ]"#;
    fs::write(ctx.file_for(keys::CART), stored).unwrap();

    let state = ctx.open().unwrap();
    assert_eq!(state.cart().items().len(), 1);
    assert_eq!(state.cart().item_count(), 2);
    assert_eq!(state.cart().total(), Decimal::from(4_998));
}

#[test]
fn out_of_range_quantity_falls_back_to_empty() {
    let mut ctx = TestContext::new().unwrap();
    let stored = r#"[
        {"id":7,"name":"Classic Crewneck T-Shirt","price":"₹2,499","image":"","category":"T-shirts","quantity":99999999999}
    ]"#;
    fs::write(ctx.file_for(keys::CART), stored).unwrap();

    let state = ctx.open().unwrap();
    assert!(state.cart().items().is_empty());
    assert_eq!(state.cart().total(), Decimal::ZERO);
    assert!(!ctx.file_for(keys::CART).exists());
}

#[test]
fn huge_stored_amounts_load_without_panicking() {
    let mut ctx = TestContext::new().unwrap();
    let stored = r#"[
        {"id":3,"name":"Oversized Denim Jacket","price":"79228162514264337593543950335","image":"","category":"Jackets","quantity":2},
        {"id":12,"name":"Embroidered Baseball Cap","price":"₹1,999","image":"","category":"Caps","quantity":4294967295},
        {"id":7,"name":"Classic Crewneck T-Shirt","price":"₹2,499","image":"","category":"T-shirts","quantity":4294967295}
    ]"#;
    fs::write(ctx.file_for(keys::CART), stored).unwrap();

    let mut state = ctx.open().unwrap();
    assert_eq!(state.cart().items().len(), 3);
    assert_eq!(state.cart().item_count(), 2 + 2 * u64::from(u32::MAX));
    // The overflowing jacket line contributes nothing.
    assert_eq!(
        state.cart().total(),
        Decimal::from(u32::MAX) * Decimal::from(1_999 + 2_499)
    );

    // Further changes keep working and persist.
    state.cart_mut().update_quantity(ProductId::new(12), 3_000_000_000);
    state.cart_mut().update_quantity(ProductId::new(7), 3_000_000_000);
    assert_eq!(state.cart().item_count(), 6_000_000_002);
    drop(state);

    let state = ctx.open().unwrap();
    assert_eq!(state.cart().item_count(), 6_000_000_002);
    assert_eq!(
        state.cart().total(),
        Decimal::from(3_000_000_000_u64) * Decimal::from(1_999 + 2_499)
    );
}

#[test]
fn wishlist_survives_reload() {
    let mut ctx = TestContext::new().unwrap();
    {
        let mut state = ctx.open().unwrap();
        state.add_product_to_wishlist(ProductId::new(3)).unwrap();
        state.add_product_to_wishlist(ProductId::new(13)).unwrap();
        state.add_product_to_wishlist(ProductId::new(3)).unwrap();
    }

    let state = ctx.open().unwrap();
    let ids: Vec<i32> = state
        .wishlist()
        .items()
        .iter()
        .map(|i| i.id.as_i32())
        .collect();
    assert_eq!(ids, vec![3, 13]);
}

#[test]
fn cleared_containers_stay_cleared() {
    let mut ctx = TestContext::new().unwrap();
    {
        let mut state = ctx.open().unwrap();
        state.add_product_to_cart(ProductId::new(8), None, None).unwrap();
        state.add_product_to_wishlist(ProductId::new(8)).unwrap();
        state.cart_mut().clear_cart();
        state.wishlist_mut().clear_wishlist();
    }

    let state = ctx.open().unwrap();
    assert_eq!(state.cart().item_count(), 0);
    assert_eq!(state.wishlist().item_count(), 0);
}

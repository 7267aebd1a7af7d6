//! Cart store persistence against real files on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::num::NonZeroU32;

use cosmic_cart_core::{ProductId, Removal};
use cosmic_cart_integration_tests::product;
use cosmic_cart_storefront::storage::FileStorage;
use cosmic_cart_storefront::store::CartStore;

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::load(FileStorage::new(dir.path()));
    store.add_entry(&product(1, "Backpack", 10995)).unwrap();
    store.add_entry(&product(2, "Slim Fit T-Shirt", 2230)).unwrap();
    store.add_entry(&product(1, "Backpack", 10995)).unwrap();
    drop(store);

    let reloaded = CartStore::load(FileStorage::new(dir.path()));
    let cart = reloaded.cart();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, qty(2));
    assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, qty(1));
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn test_persisted_record_shape() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::load(FileStorage::new(dir.path()));
    store.add_entry(&product(3, "Cotton Jacket", 5599)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = value.get(0).expect("one entry");

    assert_eq!(entry["id"], 3);
    assert_eq!(entry["title"], "Cotton Jacket");
    assert_eq!(entry["quantity"], 1);
    assert_eq!(entry["image"], "https://fakestoreapi.com/img/3.jpg");
    assert!(entry.get("price").is_some());
}

#[test]
fn test_remove_and_clear_are_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::load(FileStorage::new(dir.path()));
    store.add_entry(&product(1, "Backpack", 10995)).unwrap();
    store.add_entry(&product(1, "Backpack", 10995)).unwrap();
    store.add_entry(&product(2, "Slim Fit T-Shirt", 2230)).unwrap();

    assert_eq!(
        store.remove_entry(ProductId::new(1)).unwrap(),
        Some(Removal::Decremented(qty(1)))
    );
    assert_eq!(
        store.remove_entry(ProductId::new(2)).unwrap(),
        Some(Removal::Removed)
    );

    let reloaded = CartStore::load(FileStorage::new(dir.path()));
    assert_eq!(reloaded.cart().len(), 1);
    assert_eq!(
        reloaded.cart().get(ProductId::new(1)).unwrap().quantity,
        qty(1)
    );

    let mut store = reloaded;
    store.clear().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
    assert!(CartStore::load(FileStorage::new(dir.path())).cart().is_empty());
}

#[test]
fn test_malformed_file_loads_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "{not json").unwrap();

    let mut store = CartStore::load(FileStorage::new(dir.path()));
    assert!(store.cart().is_empty());

    // The next mutation overwrites the corrupt record
    store.add_entry(&product(4, "Mens Casual Slim Fit", 1599)).unwrap();
    let reloaded = CartStore::load(FileStorage::new(dir.path()));
    assert_eq!(reloaded.cart().len(), 1);
}

#[test]
fn test_duplicate_ids_in_file_load_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let record = r#"[
        {"id": 1, "title": "A", "price": "1.00", "image": "a.jpg", "quantity": 1},
        {"id": 1, "title": "A", "price": "1.00", "image": "a.jpg", "quantity": 2}
    ]"#;
    std::fs::write(dir.path().join("cart.json"), record).unwrap();

    let store = CartStore::load(FileStorage::new(dir.path()));
    assert!(store.cart().is_empty());
}

#[test]
fn test_missing_directory_is_created_on_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("state").join("cosmic-cart");

    let mut store = CartStore::load(FileStorage::new(&nested));
    assert!(store.cart().is_empty());
    store.add_entry(&product(5, "Bracelet", 69500)).unwrap();

    assert!(nested.join("cart.json").exists());
}

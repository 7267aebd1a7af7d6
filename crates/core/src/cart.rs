//! Cart entries and quantity aggregation.
//!
//! A [`Cart`] is an ordered list of [`CartEntry`] values, unique by product
//! ID. Adding a product that is already present bumps its quantity instead
//! of appending a second line, and removing from a line with quantity 1
//! drops the line. A stored quantity is therefore always at least 1, which
//! the [`NonZeroU32`] field makes unrepresentable otherwise.

use std::collections::HashSet;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Price, ProductId};

/// Errors from cart operations and cart decoding.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product handed to [`Cart::add`] has no usable ID.
    #[error("invalid product data: missing product id")]
    MissingProductId,
    /// A decoded cart lists the same product twice.
    #[error("duplicate cart entry for product {0}")]
    DuplicateEntry(ProductId),
}

/// One product line in the cart.
///
/// Field names on the wire match the catalog record (`price`, `image`) so a
/// persisted cart reads like a list of products with quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub title: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    #[serde(rename = "image")]
    pub image_ref: String,
    pub quantity: NonZeroU32,
}

impl CartEntry {
    /// Create a line for `product` with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            image_ref: product.image.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount() * Decimal::from(self.quantity.get())
    }
}

/// What [`Cart::remove`] did to the matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The quantity went down by one and is now the contained value.
    Decremented(NonZeroU32),
    /// The line had quantity 1 and was dropped.
    Removed,
}

/// Ordered cart lines, unique by product ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the quantity of an existing line with the same ID, or
    /// appends a new line with quantity 1. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingProductId`] without touching the cart if
    /// the product ID is the missing-ID sentinel.
    pub fn add(&mut self, product: &Product) -> Result<NonZeroU32, CartError> {
        if product.id.is_missing() {
            return Err(CartError::MissingProductId);
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return Ok(entry.quantity);
        }

        let entry = CartEntry::from_product(product);
        let quantity = entry.quantity;
        self.entries.push(entry);
        Ok(quantity)
    }

    /// Remove one unit of product `id`.
    ///
    /// Returns `None` when no line matches, in which case the cart is
    /// unchanged.
    pub fn remove(&mut self, id: ProductId) -> Option<Removal> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.get_mut(position)?;

        if let Some(quantity) = NonZeroU32::new(entry.quantity.get() - 1) {
            entry.quantity = quantity;
            Some(Removal::Decremented(quantity))
        } else {
            self.entries.remove(position);
            Some(Removal::Removed)
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The line for product `id`, if any.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.quantity.get()))
            .sum()
    }

    /// `Σ(unit_price × quantity)` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CartError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.is_missing() {
                return Err(CartError::MissingProductId);
            }
            if !seen.insert(entry.id) {
                return Err(CartError::DuplicateEntry(entry.id));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::product::Rating;

    fn product(id: u64, cents: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(cents),
            description: String::new(),
            category: "electronics".to_string(),
            image: format!("https://img.example/{id}.png"),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_add_same_product_twice_aggregates() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2000)).unwrap();
        let quantity = cart.add(&product(1, 2000)).unwrap();

        assert_eq!(quantity.get(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity.get(), 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, 100)).unwrap();
        cart.add(&product(1, 100)).unwrap();
        cart.add(&product(3, 100)).unwrap();

        let ids: Vec<u64> = cart.entries().iter().map(|e| e.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_add_missing_id_is_rejected_without_mutation() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.add(&product(0, 100)),
            Err(CartError::MissingProductId)
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();
        cart.add(&product(1, 100)).unwrap();

        assert_eq!(
            cart.remove(ProductId::new(1)),
            Some(Removal::Decremented(NonZeroU32::MIN))
        );
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity.get(), 1);

        assert_eq!(cart.remove(ProductId::new(1)), Some(Removal::Removed));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();
        let before = cart.clone();

        assert_eq!(cart.remove(ProductId::new(99)), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100)).unwrap();
        cart.add(&product(2, 100)).unwrap();
        cart.clear();
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_and_item_count() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2000)).unwrap();
        cart.add(&product(1, 2000)).unwrap();
        cart.add(&product(2, 1099)).unwrap();

        assert_eq!(cart.subtotal(), Decimal::new(5099, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_serde_preserves_order_and_quantities() {
        let mut cart = Cart::new();
        cart.add(&product(5, 999)).unwrap();
        cart.add(&product(2, 2000)).unwrap();
        cart.add(&product(5, 999)).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_deserialize_accepts_numeric_prices() {
        let json = r#"[{"id":1,"title":"Backpack","price":109.95,"image":"a.png","quantity":2}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let entry = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(entry.unit_price.amount(), Decimal::new(10995, 2));
        assert_eq!(entry.quantity.get(), 2);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = r#"[{"id":1,"title":"x","price":"1","image":"","quantity":0}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"[
            {"id":1,"title":"x","price":"1","image":"","quantity":1},
            {"id":1,"title":"x","price":"1","image":"","quantity":1}
        ]"#;
        let err = serde_json::from_str::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate cart entry for product 1"));
    }
}

//! Integration tests for Cosmic Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cosmic-cart-integration-tests
//!
//! # Include tests that hit the public Fake Store API
//! cargo test -p cosmic-cart-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart store against real files on disk
//! - `pricing_scenarios` - End-to-end price details for whole sessions
//! - `catalog_client` - Catalog client against a mock HTTP server

use cosmic_cart_core::{Price, Product, ProductId, Rating};

/// Build a catalog product priced in cents.
#[must_use]
pub fn product(id: u64, title: &str, cents: u32) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::from_cents(cents),
        description: String::new(),
        category: "men's clothing".to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: Rating::default(),
    }
}

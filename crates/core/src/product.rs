//! Catalog product records.
//!
//! A [`Product`] is the validated form of one catalog record. The storefront
//! crate converts raw API responses into this type at the fetch boundary, so
//! everything downstream can rely on its fields being present.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    /// Image URL.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average score, 0-5.
    pub rate: f64,
    /// Number of ratings.
    pub count: u32,
}

//! Validation of raw catalog records into core products.
//!
//! The catalog API is loosely typed: any field can be missing or `null`.
//! Records are first decoded into permissive wire structs and then checked
//! field by field, so a bad record becomes a [`CatalogError`] here instead
//! of an empty title or a zero price somewhere in the cart.

use cosmic_cart_core::{Price, Product, ProductId, Rating};
use serde::Deserialize;

use super::CatalogError;

/// A product record as the catalog sends it.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    id: Option<u64>,
    title: Option<String>,
    price: Option<serde_json::Number>,
    description: Option<String>,
    category: Option<String>,
    image: Option<String>,
    rating: Option<RatingRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RatingRecord {
    rate: Option<f64>,
    count: Option<u32>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = String;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .map(ProductId::new)
            .filter(|id| !id.is_missing())
            .ok_or("missing id")?;

        let title = record
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| format!("product {id}: missing title"))?;

        let price = record
            .price
            .ok_or_else(|| format!("product {id}: missing price"))
            .and_then(|n| Price::parse(&n.to_string()).map_err(|e| format!("product {id}: {e}")))?;

        let image = record
            .image
            .ok_or_else(|| format!("product {id}: missing image"))?;

        let category = record
            .category
            .ok_or_else(|| format!("product {id}: missing category"))?;

        let rating = record
            .rating
            .ok_or_else(|| "missing rating".to_string())
            .and_then(convert_rating)
            .map_err(|e| format!("product {id}: {e}"))?;

        Ok(Self {
            id,
            title,
            price,
            description: record.description.unwrap_or_default(),
            category,
            image,
            rating,
        })
    }
}

fn convert_rating(record: RatingRecord) -> Result<Rating, String> {
    let rate = record.rate.ok_or("missing rating rate")?;
    if !rate.is_finite() || !(0.0..=5.0).contains(&rate) {
        return Err(format!("rating out of range: {rate}"));
    }
    Ok(Rating {
        rate,
        count: record.count.unwrap_or_default(),
    })
}

/// Decode a product list response.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the body is not a JSON array of
/// objects, and [`CatalogError::InvalidRecord`] for the first record that
/// fails validation.
pub fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<ProductRecord> = serde_json::from_str(body)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Product::try_from(record).map_err(|reason| CatalogError::InvalidRecord { index, reason })
        })
        .collect()
}

/// Decode a single product response.
///
/// The catalog answers an unknown ID with `200 OK` and an empty or `null`
/// body, which is reported as `Ok(None)`.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed JSON and
/// [`CatalogError::InvalidRecord`] if the record fails validation.
pub fn parse_product(body: &str) -> Result<Option<Product>, CatalogError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let Some(record) = serde_json::from_str::<Option<ProductRecord>>(body)? else {
        return Ok(None);
    };
    Product::try_from(record)
        .map(Some)
        .map_err(|reason| CatalogError::InvalidRecord { index: 0, reason })
}

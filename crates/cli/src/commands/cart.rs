//! Cart commands.
//!
//! Every command loads the cart from the file-backed storage in
//! `COSMIC_CART_STORAGE_DIR`; mutating commands write it back before
//! returning.
//!
//! # Usage
//!
//! ```bash
//! cosmic-cart add 1
//! cosmic-cart remove 1
//! cosmic-cart show --coupon HALFOFF
//! cosmic-cart clear
//! ```

#![allow(clippy::print_stdout)]

use cosmic_cart_core::{ProductId, Removal};
use cosmic_cart_storefront::catalog::CatalogClient;
use cosmic_cart_storefront::config::StorefrontConfig;
use cosmic_cart_storefront::error::{AppError, Result, add_breadcrumb};
use cosmic_cart_storefront::session::CartSession;
use cosmic_cart_storefront::storage::FileStorage;
use cosmic_cart_storefront::store::CartStore;
use cosmic_cart_storefront::views::{CartView, available_coupons};

use super::render;

fn open_store(config: &StorefrontConfig) -> CartStore<FileStorage> {
    CartStore::load(FileStorage::new(config.storage_dir.clone()))
}

fn require_id(id: ProductId) -> Result<ProductId> {
    if id.is_missing() {
        return Err(AppError::BadRequest("product id must be positive".to_string()));
    }
    Ok(id)
}

/// Fetch a product from the catalog and add one unit of it.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or the cart cannot be
/// saved.
pub async fn add(config: &StorefrontConfig, id: ProductId) -> Result<()> {
    let id = require_id(id)?;
    add_breadcrumb("cart", "Add to cart", Some(&[("product_id", &id.to_string())]));

    let catalog = CatalogClient::new(&config.catalog);
    let product = catalog.get_product(id).await?;

    let mut store = open_store(config);
    let Some(quantity) = store.add_entry(&product)? else {
        return Err(AppError::BadRequest(format!(
            "product {id} cannot be added to the cart"
        )));
    };

    println!("Added {} (quantity {quantity})", product.title);
    Ok(())
}

/// Remove one unit of a product from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(config: &StorefrontConfig, id: ProductId) -> Result<()> {
    add_breadcrumb(
        "cart",
        "Remove from cart",
        Some(&[("product_id", &id.to_string())]),
    );

    let mut store = open_store(config);
    match store.remove_entry(id)? {
        Some(Removal::Decremented(quantity)) => {
            println!("Product {id} now has quantity {quantity}");
        }
        Some(Removal::Removed) => println!("Removed product {id} from the cart"),
        None => println!("Product {id} is not in the cart"),
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear(config: &StorefrontConfig) -> Result<()> {
    add_breadcrumb("cart", "Clear cart", None);

    let mut store = open_store(config);
    store.clear()?;
    println!("Cart cleared");
    Ok(())
}

/// Print the cart and its price details, applying `coupon` for this view.
///
/// An unknown coupon is shown inline and is not an error.
pub fn show(config: &StorefrontConfig, coupon: Option<&str>) {
    let mut session = CartSession::new(open_store(config));
    if let Some(code) = coupon {
        session.apply_coupon(code.trim());
    }

    let breakdown = session.breakdown();
    let view = CartView::new(session.store().cart(), session.coupons(), &breakdown);
    print!("{}", render::cart(&view));
}

/// Print the available coupons.
pub fn coupons() {
    print!("{}", render::coupons(&available_coupons()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_rejects_zero() {
        assert!(matches!(
            require_id(ProductId::new(0)),
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(require_id(ProductId::new(4)).unwrap(), ProductId::new(4));
    }
}

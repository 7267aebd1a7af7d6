//! Catalog commands.

#![allow(clippy::print_stdout)]

use cosmic_cart_storefront::catalog::CatalogClient;
use cosmic_cart_storefront::config::StorefrontConfig;
use cosmic_cart_storefront::error::Result;
use cosmic_cart_storefront::views::ProductView;

use super::render;

/// List every catalog product.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched or returns invalid data.
pub async fn products(config: &StorefrontConfig) -> Result<()> {
    let catalog = CatalogClient::new(&config.catalog);
    let products = catalog.list_products().await?;

    let views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
    print!("{}", render::products(&views));
    Ok(())
}

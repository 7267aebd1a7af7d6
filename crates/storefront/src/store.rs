//! The persisted cart store.
//!
//! [`CartStore`] is the single owner of the cart. It is loaded once from
//! storage, mutated only through its operations, and writes the whole cart
//! back under [`CART_STORAGE_KEY`] after every mutation. Readers get a
//! shared reference to the [`Cart`] and derive everything else from it.

use std::num::NonZeroU32;

use cosmic_cart_core::{Cart, Product, ProductId, Removal};
use tracing::{debug, instrument, warn};

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the JSON-encoded cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Cart state with save-on-mutation persistence.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    ///
    /// An absent key, an unreadable backend, or a value that does not decode
    /// as a valid cart all yield an empty cart. Nothing is written back until
    /// the first mutation.
    #[instrument(skip(storage))]
    pub fn load(storage: S) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Cart>(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding malformed persisted cart");
                Cart::new()
            }),
            Ok(None) => {
                debug!("No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart, starting empty");
                Cart::new()
            }
        };

        debug!(lines = cart.len(), "Cart loaded");
        Self { storage, cart }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product` and persist.
    ///
    /// Returns the line's new quantity, or `None` if the product was rejected
    /// for having no usable ID (logged, cart untouched, nothing written).
    ///
    /// # Errors
    ///
    /// Returns an error if the cart could not be written. The in-memory cart
    /// keeps the mutation.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_entry(&mut self, product: &Product) -> Result<Option<NonZeroU32>, StorageError> {
        let quantity = match self.cart.add(product) {
            Ok(quantity) => quantity,
            Err(e) => {
                warn!(
                    error = %e,
                    title = %product.title,
                    "Invalid product data, not added to cart"
                );
                return Ok(None);
            }
        };

        debug!(quantity = quantity.get(), "Added to cart");
        self.persist()?;
        Ok(Some(quantity))
    }

    /// Remove one unit of product `id` and persist.
    ///
    /// Returns `None` (and writes nothing) if the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart could not be written.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_entry(&mut self, id: ProductId) -> Result<Option<Removal>, StorageError> {
        let Some(removal) = self.cart.remove(id) else {
            debug!("Product not in cart");
            return Ok(None);
        };

        debug!(?removal, "Removed from cart");
        self.persist()?;
        Ok(Some(removal))
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart could not be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        debug!("Cart cleared");
        self.persist()
    }

    /// Consume the store, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.cart)?;
        self.storage.set_item(CART_STORAGE_KEY, &raw)
    }
}

//! A checkout session: the persisted cart plus transient coupon state.

use cosmic_cart_core::{AppliedCoupon, CouponState, PriceBreakdown};
use tracing::{info, instrument};

use crate::storage::KeyValueStorage;
use crate::store::CartStore;

/// Pairs a [`CartStore`] with the coupon applied during this session.
///
/// The coupon lives only as long as the session; reloading the cart from
/// storage starts with no coupon applied.
#[derive(Debug)]
pub struct CartSession<S> {
    store: CartStore<S>,
    coupons: CouponState,
}

impl<S: KeyValueStorage> CartSession<S> {
    #[must_use]
    pub const fn new(store: CartStore<S>) -> Self {
        Self {
            store,
            coupons: CouponState::new(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    #[must_use]
    pub const fn coupons(&self) -> &CouponState {
        &self.coupons
    }

    /// Apply a coupon code against the current subtotal.
    ///
    /// An unknown code never fails; it clears the applied coupon and leaves
    /// an error message on [`CouponState::error`].
    #[instrument(skip(self))]
    pub fn apply_coupon(&mut self, code: &str) -> Option<&AppliedCoupon> {
        let subtotal = self.store.cart().subtotal();
        let applied = self.coupons.apply(code, subtotal);
        match applied {
            Some(coupon) => info!(amount = %coupon.amount, "Coupon applied"),
            None => info!("Coupon rejected"),
        }
        applied
    }

    /// Derive the price breakdown from the current cart and coupon.
    #[must_use]
    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::calculate(self.store.cart(), self.coupons.applied())
    }

    /// End the session, returning the store.
    pub fn into_store(self) -> CartStore<S> {
        self.store
    }
}

//! Price breakdown derivation.
//!
//! A [`PriceBreakdown`] is never stored. It is recomputed from the cart and
//! the applied coupon every time it is needed:
//!
//! ```text
//! subtotal            = Σ(unit_price × quantity)
//! percentage_discount = subtotal × 0.10
//! platform_fee        = 5.00
//! shipping_fee        = 5.99, or 0 for an empty cart
//! total               = max(0, subtotal − percentage_discount − coupon_discount
//!                              + platform_fee + shipping_fee)
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;
use crate::coupon::AppliedCoupon;

/// Promotional discount always taken off the subtotal (10%).
pub const PROMOTIONAL_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Fixed platform fee charged on every order.
pub const PLATFORM_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Shipping fee charged on a non-empty cart.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// The monetary figures shown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub percentage_discount: Decimal,
    pub coupon_discount: Decimal,
    pub platform_fee: Decimal,
    pub shipping_fee: Decimal,
    /// Amount payable, never below zero.
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Derive the breakdown for `cart` with an optional applied coupon.
    #[must_use]
    pub fn calculate(cart: &Cart, coupon: Option<&AppliedCoupon>) -> Self {
        let subtotal = cart.subtotal();
        let percentage_discount = subtotal * PROMOTIONAL_DISCOUNT_RATE;
        let coupon_discount = coupon.map_or(Decimal::ZERO, |c| c.amount);
        let platform_fee = PLATFORM_FEE;
        let shipping_fee = if cart.is_empty() {
            Decimal::ZERO
        } else {
            SHIPPING_FEE
        };

        let total = (subtotal - percentage_discount - coupon_discount + platform_fee + shipping_fee)
            .max(Decimal::ZERO);

        Self {
            subtotal,
            percentage_discount,
            coupon_discount,
            platform_fee,
            shipping_fee,
            total,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::coupon::CouponState;
    use crate::product::{Product, Rating};
    use crate::types::{Price, ProductId};

    fn cart_with(lines: &[(u64, u32, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, cents, quantity) in lines {
            let product = Product {
                id: ProductId::new(id),
                title: format!("Product {id}"),
                price: Price::from_cents(cents),
                description: String::new(),
                category: String::new(),
                image: String::new(),
                rating: Rating::default(),
            };
            for _ in 0..quantity {
                cart.add(&product).unwrap();
            }
        }
        cart
    }

    #[test]
    fn test_single_line_without_coupon() {
        let cart = cart_with(&[(1, 2000, 2)]);
        let breakdown = PriceBreakdown::calculate(&cart, None);

        assert_eq!(breakdown.subtotal, Decimal::new(4000, 2));
        assert_eq!(breakdown.percentage_discount, Decimal::new(400, 2));
        assert_eq!(breakdown.coupon_discount, Decimal::ZERO);
        assert_eq!(breakdown.platform_fee, Decimal::new(500, 2));
        assert_eq!(breakdown.shipping_fee, Decimal::new(599, 2));
        assert_eq!(breakdown.total, Decimal::new(4699, 2));
    }

    #[test]
    fn test_single_line_with_save10() {
        let cart = cart_with(&[(1, 2000, 2)]);
        let mut coupons = CouponState::new();
        coupons.apply("SAVE10", cart.subtotal());

        let breakdown = PriceBreakdown::calculate(&cart, coupons.applied());
        assert_eq!(breakdown.coupon_discount, Decimal::new(10, 0));
        assert_eq!(breakdown.total, Decimal::new(3699, 2));
    }

    #[test]
    fn test_empty_cart_pays_platform_fee_only() {
        let breakdown = PriceBreakdown::calculate(&Cart::new(), None);
        assert_eq!(breakdown.subtotal, Decimal::ZERO);
        assert_eq!(breakdown.shipping_fee, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::new(5, 0));
    }

    #[test]
    fn test_subtotal_and_discount_over_many_lines() {
        let cart = cart_with(&[(1, 10995, 1), (2, 2230, 3), (3, 55, 7)]);
        let breakdown = PriceBreakdown::calculate(&cart, None);

        let expected = Decimal::new(10995, 2) + Decimal::new(2230, 2) * Decimal::from(3)
            + Decimal::new(55, 2) * Decimal::from(7);
        assert_eq!(breakdown.subtotal, expected);
        assert_eq!(breakdown.percentage_discount, expected * Decimal::new(1, 1));
    }

    #[test]
    fn test_halfoff_on_large_cart() {
        let cart = cart_with(&[(1, 100_000, 3)]);
        let mut coupons = CouponState::new();
        coupons.apply("HALFOFF", cart.subtotal());

        let breakdown = PriceBreakdown::calculate(&cart, coupons.applied());
        assert_eq!(breakdown.coupon_discount, Decimal::new(1500, 0));
        // 3000 - 300 - 1500 + 5 + 5.99
        assert_eq!(breakdown.total, Decimal::new(121_099, 2));
    }

    #[test]
    fn test_total_is_clamped_at_zero() {
        // SAVE10 on an empty cart would otherwise leave 5.00 - 10.00.
        let mut coupons = CouponState::new();
        coupons.apply("SAVE10", Decimal::ZERO);

        let breakdown = PriceBreakdown::calculate(&Cart::new(), coupons.applied());
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_stale_halfoff_after_cart_shrinks_is_clamped() {
        let mut cart = cart_with(&[(1, 10_000, 2)]);
        let mut coupons = CouponState::new();
        coupons.apply("HALFOFF", cart.subtotal());
        cart.clear();

        let breakdown = PriceBreakdown::calculate(&cart, coupons.applied());
        assert_eq!(breakdown.coupon_discount, Decimal::new(100, 0));
        assert_eq!(breakdown.total, Decimal::ZERO);
    }
}

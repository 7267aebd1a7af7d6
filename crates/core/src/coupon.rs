//! Fixed coupon table and applied-coupon state.
//!
//! Coupons are looked up by exact code in [`AVAILABLE_COUPONS`]. Applying a
//! coupon computes its discount once, against the subtotal at the time of
//! application, and keeps that amount until the coupon is reapplied or
//! replaced. Coupon state belongs to one session and is never persisted.

use rust_decimal::Decimal;
use serde::Serialize;

/// Message shown when a code does not match any coupon.
pub const INVALID_COUPON_MESSAGE: &str = "Invalid coupon code!";

/// How a coupon reduces the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponKind {
    /// A fixed amount off, regardless of cart contents.
    Flat(Decimal),
    /// A fraction of the subtotal off (`0.5` is 50%).
    Percentage(Decimal),
}

/// A discount code from the fixed coupon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coupon {
    pub code: &'static str,
    pub description: &'static str,
    pub kind: CouponKind,
}

/// Every coupon the store accepts.
pub const AVAILABLE_COUPONS: [Coupon; 2] = [
    Coupon {
        code: "SAVE10",
        description: "Get $10 off your order.",
        kind: CouponKind::Flat(Decimal::TEN),
    },
    Coupon {
        code: "HALFOFF",
        description: "Get 50% off your order.",
        kind: CouponKind::Percentage(Decimal::from_parts(5, 0, 0, false, 1)),
    },
];

impl Coupon {
    /// Look up a coupon by its exact code.
    #[must_use]
    pub fn find(code: &str) -> Option<&'static Self> {
        AVAILABLE_COUPONS.iter().find(|c| c.code == code)
    }

    /// The discount this coupon gives on `subtotal`.
    #[must_use]
    pub fn discount_for(&self, subtotal: Decimal) -> Decimal {
        match self.kind {
            CouponKind::Flat(amount) => amount,
            CouponKind::Percentage(rate) => subtotal * rate,
        }
    }
}

/// A coupon that has been applied, with its discount fixed at application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedCoupon {
    pub code: String,
    pub amount: Decimal,
}

/// The coupon part of a checkout session: what is applied, and the error
/// from the last failed attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponState {
    applied: Option<AppliedCoupon>,
    error: Option<String>,
}

impl CouponState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            applied: None,
            error: None,
        }
    }

    /// Apply `code` against the current `subtotal`.
    ///
    /// On a match the coupon replaces any previous one and the error is
    /// cleared. On a mismatch any applied coupon is dropped and
    /// [`INVALID_COUPON_MESSAGE`] is recorded. Returns the applied coupon on
    /// success.
    pub fn apply(&mut self, code: &str, subtotal: Decimal) -> Option<&AppliedCoupon> {
        if let Some(coupon) = Coupon::find(code) {
            self.error = None;
            self.applied = Some(AppliedCoupon {
                code: coupon.code.to_string(),
                amount: coupon.discount_for(subtotal),
            });
        } else {
            self.applied = None;
            self.error = Some(INVALID_COUPON_MESSAGE.to_string());
        }
        self.applied.as_ref()
    }

    #[must_use]
    pub const fn applied(&self) -> Option<&AppliedCoupon> {
        self.applied.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drop the applied coupon and any error.
    pub fn reset(&mut self) {
        self.applied = None;
        self.error = None;
    }
}

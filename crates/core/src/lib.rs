//! Cosmic Cart Core - Cart, coupon and pricing library.
//!
//! This crate provides the domain shared by all Cosmic Cart components:
//! - `storefront` - Cart store, storage backends and catalog client
//! - `cli` - Command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP clients. Persistence and fetching live in the
//! storefront crate, which owns a [`Cart`] and re-derives a
//! [`PriceBreakdown`] from it whenever it is rendered.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices
//! - [`product`] - Catalog product records
//! - [`cart`] - Cart entries and quantity aggregation
//! - [`coupon`] - Fixed coupon table and applied-coupon state
//! - [`pricing`] - Price breakdown derivation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod coupon;
pub mod pricing;
pub mod product;
pub mod types;

pub use cart::{Cart, CartEntry, CartError, Removal};
pub use coupon::{AppliedCoupon, Coupon, CouponKind, CouponState};
pub use pricing::PriceBreakdown;
pub use product::{Product, Rating};
pub use types::*;

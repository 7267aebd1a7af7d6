//! Display data for rendering the cart and catalog.
//!
//! These are plain structs of preformatted strings, built from core types
//! with `From` conversions. Renderers never do money arithmetic.

use cosmic_cart_core::coupon::AVAILABLE_COUPONS;
use cosmic_cart_core::{Cart, CartEntry, CouponState, PriceBreakdown, Product, format_money};

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Price details display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDetailsView {
    pub total_mrp: String,
    pub discount_on_mrp: String,
    /// Only present when a coupon is applied.
    pub coupon_discount: Option<String>,
    pub platform_fee: String,
    pub shipping_fee: String,
    pub total_payable: String,
}

/// Coupon message display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponMessageView {
    Applied { code: String, amount: String },
    Error(String),
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub coupon_message: Option<CouponMessageView>,
    pub price_details: PriceDetailsView,
}

/// Available coupon display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponView {
    pub code: &'static str,
    pub description: &'static str,
}

/// Catalog product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: String,
    pub rating: String,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.as_u64(),
            title: entry.title.clone(),
            image: entry.image_ref.clone(),
            quantity: entry.quantity.get(),
            price: entry.unit_price.display(),
            line_price: format_money(entry.line_total()),
        }
    }
}

impl PriceDetailsView {
    /// Format `breakdown`. The coupon row is shown whenever a coupon is
    /// applied, even if it is worth nothing.
    #[must_use]
    pub fn new(breakdown: &PriceBreakdown, coupon_applied: bool) -> Self {
        Self {
            total_mrp: format_money(breakdown.subtotal),
            discount_on_mrp: format!("-{}", format_money(breakdown.percentage_discount)),
            coupon_discount: coupon_applied
                .then(|| format!("-{}", format_money(breakdown.coupon_discount))),
            platform_fee: format_money(breakdown.platform_fee),
            shipping_fee: format_money(breakdown.shipping_fee),
            total_payable: format_money(breakdown.total),
        }
    }
}

impl CouponMessageView {
    /// The message for the session's coupon state, if there is one to show.
    #[must_use]
    pub fn from_state(state: &CouponState) -> Option<Self> {
        if let Some(applied) = state.applied() {
            return Some(Self::Applied {
                code: applied.code.clone(),
                amount: format!("-{}", format_money(applied.amount)),
            });
        }
        state.error().map(|e| Self::Error(e.to_string()))
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u64(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price.display(),
            rating: format!("{:.1} ({})", product.rating.rate, product.rating.count),
        }
    }
}

impl CartView {
    /// Build the cart view from the cart, the session's coupon state, and
    /// the breakdown derived from both.
    #[must_use]
    pub fn new(cart: &Cart, coupons: &CouponState, breakdown: &PriceBreakdown) -> Self {
        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            item_count: cart.item_count(),
            coupon_message: CouponMessageView::from_state(coupons),
            price_details: PriceDetailsView::new(breakdown, coupons.applied().is_some()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The coupons offered to the user.
#[must_use]
pub fn available_coupons() -> Vec<CouponView> {
    AVAILABLE_COUPONS
        .iter()
        .map(|c| CouponView {
            code: c.code,
            description: c.description,
        })
        .collect()
}

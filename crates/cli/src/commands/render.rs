//! Plain-text rendering of storefront views.

use std::fmt::Write;

use cosmic_cart_storefront::views::{CartView, CouponMessageView, CouponView, ProductView};

const LABEL_WIDTH: usize = 18;

/// Render the cart page: lines, coupon message, price details.
pub fn cart(view: &CartView) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("Your bag is too light!\nAdd some items to start shopping.\n\n");
    } else {
        for item in &view.items {
            let _ = writeln!(out, "[{}] {}", item.id, item.title);
            let _ = writeln!(
                out,
                "    {} x {} = {}",
                item.price, item.quantity, item.line_price
            );
        }
        let _ = writeln!(out, "\n{} item(s)\n", view.item_count);
    }

    match &view.coupon_message {
        Some(CouponMessageView::Applied { code, amount }) => {
            let _ = writeln!(out, "Coupon {code} applied: {amount}\n");
        }
        Some(CouponMessageView::Error(message)) => {
            let _ = writeln!(out, "{message}\n");
        }
        None => {}
    }

    let details = &view.price_details;
    out.push_str("Price Details\n");
    push_row(&mut out, "Total MRP:", &details.total_mrp);
    push_row(&mut out, "Discount on MRP:", &details.discount_on_mrp);
    if let Some(coupon) = &details.coupon_discount {
        push_row(&mut out, "Coupon Discount:", coupon);
    }
    push_row(&mut out, "Platform Fee:", &details.platform_fee);
    push_row(&mut out, "Shipping Fee:", &details.shipping_fee);
    push_row(&mut out, "Total Payable:", &details.total_payable);

    out
}

/// Render the catalog listing.
pub fn products(views: &[ProductView]) -> String {
    let mut out = String::new();
    for p in views {
        let _ = writeln!(
            out,
            "{:>4}  {:<10} {:>5}  {}  [{}]",
            p.id, p.price, p.rating, p.title, p.category
        );
    }
    if views.is_empty() {
        out.push_str("No products available.\n");
    }
    out
}

/// Render the available coupons.
pub fn coupons(views: &[CouponView]) -> String {
    let mut out = String::from("Available Coupons\n");
    for c in views {
        let _ = writeln!(out, "  {:<10} {}", c.code, c.description);
    }
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>12}");
}

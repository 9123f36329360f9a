//! Cart Items Component
//!
//! Line items with inline quantity controls, or the empty-cart placeholder.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::models::{format_money, CartLineItem};

const SHOP_PAGE: &str = "index.html";

/// Leading integer of `raw`, the way a browser's `parseInt` reads it:
/// `"3.5"` is 3, `"2abc"` is 2, `"abc"` is `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..end).filter(|d| !d.is_empty())?;
    // Digit runs too long for i64 saturate
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Quantity typed into a cart row; non-numbers count as 1
pub fn parse_quantity(raw: &str) -> i64 {
    parse_leading_int(raw).unwrap_or(1)
}

fn go_shopping() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(SHOP_PAGE) {
        log::warn!("Navigation to {} failed: {:?}", SHOP_PAGE, e);
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="empty-cart">
            <i class="fas fa-shopping-cart"></i>
            <p>"Your cart is empty"</p>
            <button class="continue-shopping-btn" on:click=move |_| go_shopping()>
                "Start Shopping"
            </button>
        </div>
    }
}

#[component]
fn CartItemRow(item: CartLineItem) -> impl IntoView {
    let ctx = use_shop();
    let symbol = ctx.currency_symbol();
    let id = item.id();
    let quantity = i64::from(item.quantity);

    view! {
        <div class="cart-item" data-id=id.to_string()>
            <img src=item.product.image.clone() alt=item.product.name.clone() />
            <div class="cart-item-details">
                <h3>{item.product.name.clone()}</h3>
                <p>"Unit Price: " {format_money(&symbol, item.product.price)}</p>
            </div>
            <div class="cart-item-quantity">
                <button on:click=move |_| ctx.update_quantity(id, quantity - 1)>"-"</button>
                <input
                    type="number"
                    min="1"
                    prop:value=quantity.to_string()
                    on:change=move |ev| ctx.update_quantity(id, parse_quantity(&event_target_value(&ev)))
                />
                <button on:click=move |_| ctx.update_quantity(id, quantity + 1)>"+"</button>
            </div>
            <div class="cart-item-price">{format_money(&symbol, item.line_price())}</div>
            <button class="cart-item-remove" on:click=move |_| ctx.remove_from_cart(id)>
                <i class="fas fa-trash"></i>
            </button>
        </div>
    }
}

/// Cart page item list
#[component]
pub fn CartItems() -> impl IntoView {
    let ctx = use_shop();

    view! {
        <Show when=move || !ctx.cart().is_empty() fallback=|| view! { <EmptyCart /> }>
            <For
                each=move || ctx.cart().items().to_vec()
                // quantity is part of the key so edited rows re-render
                key=|item| (item.id(), item.quantity)
                children=move |item| view! { <CartItemRow item=item /> }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("-2"), -2);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("two"), 1);
    }

    #[test]
    fn test_parse_quantity_reads_leading_digits() {
        assert_eq!(parse_quantity("3.5"), 3);
        assert_eq!(parse_quantity("2abc"), 2);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("-"), 1);
        assert_eq!(parse_quantity("99999999999999999999"), i64::MAX);
        assert_eq!(parse_leading_int("x1"), None);
    }
}

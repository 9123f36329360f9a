//! Price Filter Binding
//!
//! Wires the page's `#priceRange` slider to the product grid filter and
//! mirrors its value into `#priceValue`.

use std::str::FromStr;

use leptos::prelude::*;
use rust_decimal::Decimal;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::{use_shop, ShopContext};

/// Parse a slider value; anything non-numeric yields `None`
pub fn parse_price_threshold(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn apply(ctx: &ShopContext, raw: &str) {
    let max_price = parse_price_threshold(raw);
    if max_price.is_none() {
        log::debug!("Ignoring non-numeric price filter {:?}", raw);
    }
    ctx.set_price_filter(raw, max_price);
}

/// Filter by the slider's current value and on every `input` event
pub fn bind_price_range(input: web_sys::HtmlInputElement, ctx: ShopContext) {
    apply(&ctx, &input.value());

    let target = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        apply(&ctx, &target.value());
    });
    if let Err(e) = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()) {
        log::warn!("Could not bind price filter: {:?}", e);
    }
    on_input.forget();
}

/// Selected price text
#[component]
pub fn PriceValue() -> impl IntoView {
    let ctx = use_shop();
    move || ctx.price_label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_threshold() {
        assert_eq!(parse_price_threshold("150"), Some(Decimal::new(150, 0)));
        assert_eq!(parse_price_threshold(" 79.99 "), Some(Decimal::new(7999, 2)));
        assert_eq!(parse_price_threshold(""), None);
        assert_eq!(parse_price_threshold("cheap"), None);
    }
}

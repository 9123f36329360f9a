//! Page Mounting
//!
//! Binds views to the containers the static pages provide. Every page
//! carries a different subset of containers; missing ones are skipped.

use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::catalog;
use crate::components::{
    bind_price_range, CartCount, CartItems, Notifications, PriceValue, ProductDetail,
    ProductGrid, SummaryAmount, SummaryField,
};
use crate::context::ShopContext;

fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn find_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Replace a container's content with a view
fn mount_into<F, N>(container: HtmlElement, ctx: ShopContext, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    container.set_inner_html("");
    mount_to(container, move || {
        provide_context(ctx);
        view()
    })
    .forget();
}

/// Gallery images from `data-images="a.jpg, b.jpg"`
pub fn parse_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn mount_product_detail(container: HtmlElement, ctx: ShopContext) {
    let product_id = container
        .get_attribute("data-product-id")
        .and_then(|raw| raw.trim().parse::<u32>().ok());
    let Some(product) = product_id.and_then(catalog::find_product).cloned() else {
        log::debug!("#product-detail has no known data-product-id, skipping");
        return;
    };
    let images = container
        .get_attribute("data-images")
        .map(|raw| parse_image_list(&raw))
        .unwrap_or_default();

    mount_into(container, ctx, move || view! { <ProductDetail product=product images=images /> });
}

fn bind_checkout(button: HtmlElement, ctx: ShopContext) {
    let on_click = Closure::<dyn FnMut()>::new(move || ctx.checkout());
    if let Err(e) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("Could not bind checkout button: {:?}", e);
    }
    on_click.forget();
}

/// Mount every view whose container exists on the current page
pub fn mount_shop(ctx: ShopContext) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document, nothing to mount");
        return;
    };
    let mut mounted = Vec::new();

    if let Some(grid) = find(&document, ".products-grid") {
        mount_into(grid, ctx, || view! { <ProductGrid /> });
        mounted.push("products-grid");
    }

    let price_range = find(&document, "#priceRange").and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = price_range {
        bind_price_range(input, ctx);
        if let Some(label) = find(&document, "#priceValue") {
            mount_into(label, ctx, || view! { <PriceValue /> });
        }
        mounted.push("priceRange");
    }

    if let Some(items) = find(&document, "#cart-items") {
        mount_into(items, ctx, || view! { <CartItems /> });
        mounted.push("cart-items");
    }

    for field in SummaryField::ALL {
        if let Some(el) = find(&document, &format!("#{}", field.container_id())) {
            mount_into(el, ctx, move || view! { <SummaryAmount field=field /> });
            mounted.push(field.container_id());
        }
    }

    for badge in find_all(&document, ".cart-count") {
        mount_into(badge, ctx, || view! { <CartCount /> });
    }

    if let Some(button) = find(&document, "#checkout-btn") {
        bind_checkout(button, ctx);
        mounted.push("checkout-btn");
    }

    if let Some(detail) = find(&document, "#product-detail") {
        mount_product_detail(detail, ctx);
        mounted.push("product-detail");
    }

    mount_to_body(move || {
        provide_context(ctx);
        view! { <Notifications /> }
    });

    log::debug!("Mounted: {}", mounted.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_list() {
        assert_eq!(
            parse_image_list("a.jpg, b.jpg,,  c.jpg "),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
        assert!(parse_image_list(" , ").is_empty());
    }
}

//! Product Detail Component
//!
//! Image gallery, quantity stepper and add button for a single product.

use leptos::prelude::*;

use super::cart_items::parse_leading_int;
use crate::context::use_shop;
use crate::models::{format_money, Product};

/// Decrement the stepper, never below 1
pub fn step_down(quantity: u32) -> u32 {
    if quantity > 1 {
        quantity - 1
    } else {
        quantity
    }
}

pub fn step_up(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// Stepper value from typed text, clamped to at least 1
pub fn parse_stepper(raw: &str) -> u32 {
    let value = parse_leading_int(raw).unwrap_or(1).max(1);
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Product page body
///
/// # Arguments
/// * `product` - Catalog product to show
/// * `images` - Gallery images; falls back to the product image when empty
#[component]
pub fn ProductDetail(product: Product, images: Vec<String>) -> impl IntoView {
    let ctx = use_shop();
    let symbol = ctx.currency_symbol();
    let id = product.id;

    let gallery = if images.is_empty() {
        vec![product.image.clone()]
    } else {
        images
    };
    let first = gallery.first().cloned().unwrap_or_default();
    let (main_image, set_main_image) = signal(first);
    let (quantity, set_quantity) = signal(1u32);

    view! {
        <div class="product-details">
            <div class="product-gallery">
                <img id="mainImage" class="main-image" src=move || main_image.get() alt=product.name.clone() />
                <div class="thumbnail-images">
                    {gallery.into_iter().map(|src| {
                        let target = src.clone();
                        view! {
                            <img
                                class="thumbnail"
                                src=src
                                alt=""
                                on:click=move |_| set_main_image.set(target.clone())
                            />
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="product-info">
                <h1>{product.name.clone()}</h1>
                <p class="product-category">{product.category.clone()}</p>
                <div class="product-price">
                    <span class="current-price">{format_money(&symbol, product.price)}</span>
                    <span class="original-price">{format_money(&symbol, product.original_price)}</span>
                </div>

                <div class="quantity-selector">
                    <button on:click=move |_| set_quantity.update(|q| *q = step_down(*q))>"-"</button>
                    <input
                        id="quantity"
                        type="number"
                        min="1"
                        prop:value=move || quantity.get().to_string()
                        on:change=move |ev| set_quantity.set(parse_stepper(&event_target_value(&ev)))
                    />
                    <button on:click=move |_| set_quantity.update(|q| *q = step_up(*q))>"+"</button>
                </div>

                <button class="add-to-cart-btn" on:click=move |_| ctx.add_quantity(id, quantity.get_untracked())>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepper_never_below_one() {
        assert_eq!(step_down(3), 2);
        assert_eq!(step_down(1), 1);
        assert_eq!(step_up(1), 2);
        assert_eq!(step_up(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_parse_stepper() {
        assert_eq!(parse_stepper("4"), 4);
        assert_eq!(parse_stepper("0"), 1);
        assert_eq!(parse_stepper("-1"), 1);
        assert_eq!(parse_stepper("x"), 1);
        assert_eq!(parse_stepper("2.9"), 2);
    }
}

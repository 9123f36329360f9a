//! Product Grid Component
//!
//! Product cards for every catalog product under the selected price.

use leptos::prelude::*;

use crate::catalog;
use crate::context::use_shop;
use crate::models::{format_money, Product};

/// Single product card with discount badge and add button
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_shop();
    let symbol = ctx.currency_symbol();
    let id = product.id;
    let discount = catalog::discount_percent(&product);

    view! {
        <div class="product-card">
            <img src=product.image.clone() alt=product.name.clone() />
            <h3>{product.name.clone()}</h3>
            <div class="product-price">
                <span class="current-price">{format_money(&symbol, product.price)}</span>
                <span class="original-price">{format_money(&symbol, product.original_price)}</span>
                <span class="discount">{format!("{}% OFF", discount)}</span>
            </div>
            <button class="add-to-cart-btn" on:click=move |_| ctx.add_to_cart(id)>
                "Add to Cart"
            </button>
        </div>
    }
}

/// Grid of products at or below the price filter
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_shop();

    view! {
        <For
            each=move || catalog::products_up_to(ctx.max_price())
            key=|product| product.id
            children=move |product| view! { <ProductCard product=product /> }
        />
    }
}

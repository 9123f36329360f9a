//! Cart Summary Components
//!
//! Subtotal / shipping / total amounts and the cart count badge.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::context::use_shop;
use crate::models::{format_money, CartTotals};

/// Which summary amount a container shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryField {
    Subtotal,
    Shipping,
    Total,
}

impl SummaryField {
    pub const ALL: [SummaryField; 3] = [Self::Subtotal, Self::Shipping, Self::Total];

    /// Id of the page element holding this amount
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Subtotal => "subtotal",
            Self::Shipping => "shipping",
            Self::Total => "total",
        }
    }

    pub fn pick(self, totals: &CartTotals) -> Decimal {
        match self {
            Self::Subtotal => totals.subtotal,
            Self::Shipping => totals.shipping,
            Self::Total => totals.total,
        }
    }
}

#[component]
pub fn SummaryAmount(field: SummaryField) -> impl IntoView {
    let ctx = use_shop();
    let symbol = ctx.currency_symbol();
    move || format_money(&symbol, field.pick(&ctx.totals()))
}

/// Number of units in the cart
#[component]
pub fn CartCount() -> impl IntoView {
    let ctx = use_shop();
    move || ctx.item_count().to_string()
}

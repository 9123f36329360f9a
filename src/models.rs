//! Shop Models
//!
//! Product and cart data structures. Field names follow the JSON the cart
//! is stored as (`originalPrice` in camelCase).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog product (static, never persisted on its own)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    pub image: String,
    pub category: String,
}

/// A product plus the quantity wanted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

/// Stored quantities may be `null` (the page wrote NaN), fractional or
/// negative; anything that is not a positive number reads as 0 and is
/// clamped by the cart.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(match raw {
        Some(q) if q.is_finite() && q >= 1.0 => q.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    })
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    pub fn id(&self) -> u32 {
        self.product.id
    }

    /// price × quantity, rounded to cents
    pub fn line_price(&self) -> Decimal {
        round_money(self.product.price * Decimal::from(self.quantity))
    }
}

/// Cart summary amounts, all rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

/// Round half away from zero to 2 decimal places
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `<symbol>x.xx`
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, round_money(amount))
}

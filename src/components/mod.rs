//! UI Components
//!
//! Leptos views mounted into the storefront pages.

mod cart_items;
mod cart_summary;
mod notifications;
mod price_filter;
mod product_detail;
mod product_grid;

pub use cart_items::CartItems;
pub use cart_summary::{CartCount, SummaryAmount, SummaryField};
pub use notifications::Notifications;
pub use price_filter::{bind_price_range, PriceValue};
pub use product_detail::ProductDetail;
pub use product_grid::ProductGrid;

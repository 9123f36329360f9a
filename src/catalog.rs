//! Product Catalog
//!
//! The hardcoded product list shown on the storefront pages.

use std::sync::OnceLock;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Product;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/250";

static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();

fn product(id: u32, name: &str, price_cents: i64, original_cents: i64, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        original_price: Decimal::new(original_cents, 2),
        image: PLACEHOLDER_IMAGE.to_string(),
        category: category.to_string(),
    }
}

/// All products, in display order
pub fn products() -> &'static [Product] {
    PRODUCTS.get_or_init(|| {
        vec![
            product(1, "Wireless Headphones", 9999, 12999, "Electronics"),
            product(2, "Smart Watch", 19999, 24999, "Electronics"),
            product(3, "Running Shoes", 7999, 9999, "Sports"),
        ]
    })
}

pub fn find_product(id: u32) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

/// Products priced at or below `max_price` (all of them when `None`)
pub fn products_up_to(max_price: Option<Decimal>) -> Vec<Product> {
    products()
        .iter()
        .filter(|p| max_price.map_or(true, |max| p.price <= max))
        .cloned()
        .collect()
}

/// Whole-number discount off the original price, e.g. 23 for "23% OFF"
pub fn discount_percent(product: &Product) -> Decimal {
    if product.original_price.is_zero() {
        return Decimal::ZERO;
    }
    ((product.original_price - product.price) / product.original_price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn test_find_product() {
        assert_eq!(find_product(2).map(|p| p.name.as_str()), Some("Smart Watch"));
        assert!(find_product(42).is_none());
    }

    #[test]
    fn test_filter_is_inclusive() {
        let visible = products_up_to(Some(Decimal::new(9999, 2)));
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_none_shows_all() {
        assert_eq!(products_up_to(None).len(), products().len());
        assert!(products_up_to(Some(Decimal::new(50, 0))).is_empty());
    }

    #[test]
    fn test_discount_percent() {
        // (129.99 - 99.99) / 129.99 = 23.08%
        assert_eq!(discount_percent(&products()[0]), Decimal::new(23, 0));
        // (99.99 - 79.99) / 99.99 = 20.002%
        assert_eq!(discount_percent(&products()[2]), Decimal::new(20, 0));

        let mut free = products()[0].clone();
        free.original_price = Decimal::ZERO;
        assert_eq!(discount_percent(&free), Decimal::ZERO);
    }
}

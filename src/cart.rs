//! Cart State
//!
//! Ordered line items, at most one per product id, kept in first-added
//! order. Pure data operations only; persistence lives in the controller.

use rust_decimal::Decimal;

use crate::models::{round_money, CartLineItem, CartTotals, Product};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored line items.
    ///
    /// Repeated ids merge into the first occurrence and zero quantities
    /// become 1, so the result always satisfies the cart invariants.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            let quantity = item.quantity.max(1);
            match cart.item_mut(item.id()) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
                None => cart.items.push(CartLineItem::new(item.product, quantity)),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: u32) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    fn item_mut(&mut self, product_id: u32) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == product_id)
    }

    /// Add `quantity` units of a product (at least one)
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.item_mut(product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartLineItem::new(product.clone(), quantity)),
        }
    }

    /// Returns whether a line item was removed
    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != product_id);
        self.items.len() != before
    }

    /// Set the quantity of an existing line item, clamped to at least 1.
    ///
    /// Returns whether the item was found.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) -> bool {
        let clamped = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        match self.item_mut(product_id) {
            Some(item) => {
                item.quantity = clamped;
                true
            }
            None => false,
        }
    }

    /// Total number of units across all line items
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Subtotal, flat shipping (only when non-empty) and grand total
    pub fn totals(&self, shipping_cost: Decimal) -> CartTotals {
        let subtotal: Decimal = self
            .items
            .iter()
            .map(|item| item.product.price * Decimal::from(item.quantity))
            .sum();
        let shipping = if self.is_empty() { Decimal::ZERO } else { shipping_cost };
        CartTotals {
            subtotal: round_money(subtotal),
            shipping: round_money(shipping),
            total: round_money(subtotal + shipping),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_product;
    use crate::models::format_money;

    fn shipping() -> Decimal {
        Decimal::new(1000, 2)
    }

    fn product(id: u32) -> Product {
        find_product(id).cloned().unwrap()
    }

    #[test]
    fn test_add_same_product_twice() {
        let mut cart = Cart::new();
        cart.add(&product(1), 1);
        cart.add(&product(1), 1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut cart = Cart::new();
        cart.add(&product(3), 1);
        cart.add(&product(1), 1);
        cart.add(&product(3), 1);

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(&product(2), 1);

        assert!(cart.set_quantity(2, 0));
        assert_eq!(cart.get(2).unwrap().quantity, 1);
        assert!(cart.set_quantity(2, -5));
        assert_eq!(cart.get(2).unwrap().quantity, 1);
        assert!(cart.set_quantity(2, 7));
        assert_eq!(cart.get(2).unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_missing_item() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(1, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2);
        let before = cart.clone();

        assert!(!cart.remove(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&product(1), 1);
        cart.add(&product(2), 1);

        assert!(cart.remove(1));
        assert!(cart.get(1).is_none());
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_empty_totals() {
        let totals = Cart::new().totals(shipping());
        assert_eq!(format_money("", totals.subtotal), "0.00");
        assert_eq!(format_money("", totals.shipping), "0.00");
        assert_eq!(format_money("", totals.total), "0.00");
    }

    #[test]
    fn test_single_item_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1), 1);

        let totals = cart.totals(shipping());
        assert_eq!(totals.subtotal, Decimal::new(9999, 2));
        assert_eq!(totals.shipping, Decimal::new(1000, 2));
        assert_eq!(totals.total, Decimal::new(10999, 2));
        assert_eq!(format_money("$", totals.total), "$109.99");
    }

    #[test]
    fn test_totals_multiple_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1), 2);
        cart.add(&product(3), 3);

        // 2 * 99.99 + 3 * 79.99 = 439.95
        let totals = cart.totals(shipping());
        assert_eq!(totals.subtotal, Decimal::new(43995, 2));
        assert_eq!(totals.total, Decimal::new(44995, 2));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_from_items_normalizes() {
        let items = vec![
            CartLineItem { product: product(1), quantity: 2 },
            CartLineItem { product: product(2), quantity: 0 },
            CartLineItem { product: product(1), quantity: 3 },
        ];
        let cart = Cart::from_items(items);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.get(1).unwrap().quantity, 5);
        assert_eq!(cart.get(2).unwrap().quantity, 1);
        assert_eq!(cart.items()[0].id(), 1);
    }
}

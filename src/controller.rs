//! Cart Controller
//!
//! Owns the cart and its storage backend. Every mutation is written
//! through to storage; storage failures are logged and otherwise ignored.

use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::catalog;
use crate::models::{CartLineItem, CartTotals};
use crate::storage::CartStorage;

pub struct CartController<S: CartStorage> {
    cart: Cart,
    storage: S,
    shipping_cost: Decimal,
}

impl<S: CartStorage> CartController<S> {
    /// Load the stored cart, falling back to an empty one
    pub fn load(storage: S, shipping_cost: Decimal) -> Self {
        let cart = match storage.load() {
            Ok(items) => {
                log::debug!("Loaded {} cart items", items.len());
                Cart::from_items(items)
            }
            Err(e) => {
                log::warn!("Could not read stored cart, starting empty: {}", e);
                Cart::new()
            }
        };
        Self {
            cart,
            storage,
            shipping_cost,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(self.cart.items()) {
            log::warn!("Could not save cart: {}", e);
        }
    }

    /// Add one unit of a catalog product. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, product_id: u32) -> Option<&CartLineItem> {
        self.add_quantity(product_id, 1)
    }

    /// Add `quantity` units (at least one) of a catalog product.
    ///
    /// Returns the updated line item, or `None` when the product does not
    /// exist and nothing changed.
    pub fn add_quantity(&mut self, product_id: u32, quantity: u32) -> Option<&CartLineItem> {
        let Some(product) = catalog::find_product(product_id) else {
            log::debug!("add_to_cart: no product {}", product_id);
            return None;
        };
        self.cart.add(product, quantity);
        self.persist();
        log::info!("Added {} x{} to cart", product.name, quantity.max(1));
        self.cart.get(product_id)
    }

    /// Remove a line item. Storage is rewritten even when nothing matched.
    pub fn remove_from_cart(&mut self, product_id: u32) -> bool {
        let removed = self.cart.remove(product_id);
        self.persist();
        if removed {
            log::info!("Removed product {} from cart", product_id);
        }
        removed
    }

    /// Set a line item's quantity (clamped to at least 1). No-op for
    /// products not in the cart.
    pub fn update_quantity(&mut self, product_id: u32, new_quantity: i64) -> bool {
        if !self.cart.set_quantity(product_id, new_quantity) {
            return false;
        }
        self.persist();
        true
    }

    pub fn calculate_cart_total(&self) -> CartTotals {
        self.cart.totals(self.shipping_cost)
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }
}

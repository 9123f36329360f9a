//! Shop Context
//!
//! Handle provided to every mounted view. Mutations go through the cart
//! controller, then the reactive store is refreshed from it.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;
use reactive_stores::Store;
use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::config::ShopConfig;
use crate::controller::CartController;
use crate::models::CartTotals;
use crate::storage::{CartStorage, MemoryCartStorage, WebCartStorage};
use crate::store::{self, Notification, ShopState, ShopStore};

const ADDED_MESSAGE: &str = "Product added to cart!";
const CHECKOUT_MESSAGE: &str = "Proceeding to checkout...";

type BoxedController = CartController<Box<dyn CartStorage>>;

#[derive(Clone, Copy)]
pub struct ShopContext {
    store: ShopStore,
    controller: StoredValue<BoxedController, LocalStorage>,
    config: StoredValue<ShopConfig>,
}

/// localStorage when the browser allows it, otherwise a session-only cart
fn open_storage(key: &str) -> Box<dyn CartStorage> {
    let web = WebCartStorage::new(key);
    match web.check_available() {
        Ok(()) => Box::new(web),
        Err(e) => {
            log::warn!("{}, cart will not survive a reload", e);
            Box::new(MemoryCartStorage::new())
        }
    }
}

impl ShopContext {
    pub fn new(config: ShopConfig) -> Self {
        let storage = open_storage(&config.cart_key);
        Self::with_storage(config, storage)
    }

    /// Build the context over an already chosen storage backend
    pub fn with_storage(config: ShopConfig, storage: Box<dyn CartStorage>) -> Self {
        let controller = CartController::load(storage, config.shipping_cost);
        log::info!("Cart ready with {} items", controller.item_count());
        let store = Store::new(ShopState::new(controller.cart().clone()));
        Self {
            store,
            controller: StoredValue::new_local(controller),
            config: StoredValue::new(config),
        }
    }

    fn sync(&self) {
        let cart = self.controller.with_value(|c| c.cart().clone());
        store::store_set_cart(&self.store, cart);
    }

    // ========================
    // Cart operations
    // ========================

    pub fn add_to_cart(&self, product_id: u32) {
        let added = self
            .controller
            .try_update_value(|c| c.add_to_cart(product_id).is_some())
            .unwrap_or(false);
        self.after_add(added);
    }

    pub fn add_quantity(&self, product_id: u32, quantity: u32) {
        let added = self
            .controller
            .try_update_value(|c| c.add_quantity(product_id, quantity).is_some())
            .unwrap_or(false);
        self.after_add(added);
    }

    fn after_add(&self, added: bool) {
        if added {
            self.sync();
            self.notify(ADDED_MESSAGE);
        }
    }

    pub fn remove_from_cart(&self, product_id: u32) {
        self.controller.update_value(|c| {
            c.remove_from_cart(product_id);
        });
        self.sync();
    }

    pub fn update_quantity(&self, product_id: u32, new_quantity: i64) {
        let updated = self
            .controller
            .try_update_value(|c| c.update_quantity(product_id, new_quantity))
            .unwrap_or(false);
        if updated {
            self.sync();
        }
    }

    /// Stub checkout: tell the user and log what would be charged
    pub fn checkout(&self) {
        let totals = self.controller.with_value(|c| c.calculate_cart_total());
        log::info!(
            "Checkout requested: subtotal={} shipping={} total={}",
            totals.subtotal,
            totals.shipping,
            totals.total
        );
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(CHECKOUT_MESSAGE);
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn cart(&self) -> Cart {
        store::store_cart(&self.store)
    }

    pub fn totals(&self) -> CartTotals {
        let shipping = self.shipping_cost();
        self.cart().totals(shipping)
    }

    pub fn item_count(&self) -> u32 {
        self.cart().item_count()
    }

    pub fn max_price(&self) -> Option<Decimal> {
        store::store_max_price(&self.store)
    }

    pub fn price_label(&self) -> String {
        store::store_price_label(&self.store)
    }

    pub fn set_price_filter(&self, raw: &str, max_price: Option<Decimal>) {
        store::store_set_price_filter(&self.store, raw.to_string(), max_price);
    }

    pub fn notifications(&self) -> Vec<Notification> {
        store::store_notifications(&self.store)
    }

    pub fn currency_symbol(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    fn shipping_cost(&self) -> Decimal {
        self.config.with_value(|c| c.shipping_cost)
    }

    /// Show a toast that dismisses itself after the configured delay
    pub fn notify(&self, message: &str) {
        let id = store::store_push_notification(&self.store, message);
        let delay = self.config.with_value(|c| c.notification_ms);
        schedule_dismiss(self.store, id, delay);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(shop_store: ShopStore, id: u32, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        store::store_dismiss_notification(&shop_store, id);
    });
}

// No browser timers off wasm; toasts stay until dismissed explicitly
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_shop_store: ShopStore, _id: u32, _delay_ms: u32) {}

/// Get the shop context provided by the mount layer
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn test_context() -> (Owner, ShopContext) {
        let owner = Owner::new();
        owner.set();
        let ctx = ShopContext::with_storage(ShopConfig::default(), Box::new(MemoryCartStorage::new()));
        (owner, ctx)
    }

    #[test]
    fn test_add_mirrors_cart_and_notifies() {
        let (_owner, ctx) = test_context();

        ctx.add_to_cart(1);
        ctx.add_to_cart(1);

        let cart = ctx.cart();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(ctx.item_count(), 2);

        let messages: Vec<String> = ctx.notifications().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec![ADDED_MESSAGE, ADDED_MESSAGE]);
    }

    #[test]
    fn test_unknown_product_changes_nothing() {
        let (_owner, ctx) = test_context();

        ctx.add_quantity(404, 3);

        assert!(ctx.cart().is_empty());
        assert!(ctx.notifications().is_empty());
    }

    #[test]
    fn test_update_and_remove_mirror_cart() {
        let (_owner, ctx) = test_context();
        ctx.add_quantity(3, 2);
        ctx.add_to_cart(1);

        ctx.update_quantity(3, 0);
        assert_eq!(ctx.cart().get(3).unwrap().quantity, 1);
        ctx.update_quantity(3, 5);
        assert_eq!(ctx.item_count(), 6);

        ctx.remove_from_cart(3);
        let ids: Vec<u32> = ctx.cart().items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_totals_follow_mirror() {
        let (_owner, ctx) = test_context();
        assert_eq!(ctx.totals(), CartTotals::default());

        ctx.add_to_cart(1);
        assert_eq!(ctx.totals().total, Decimal::new(10999, 2));
    }
}

//! Global Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart here
//! is a mirror of the controller's cart, refreshed after every mutation.

use leptos::prelude::*;
use reactive_stores::Store;
use rust_decimal::Decimal;

use crate::cart::Cart;

/// Transient toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
}

/// Shop UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Mirror of the persisted cart
    pub cart: Cart,
    /// Price threshold from the range filter (None = show everything)
    pub max_price: Option<Decimal>,
    /// Raw value of the range input, shown next to it
    pub price_label: String,
    /// Visible notifications, oldest first
    pub notifications: Vec<Notification>,
    pub next_notification_id: u32,
}

impl ShopState {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the cart mirror
pub fn store_set_cart(store: &ShopStore, cart: Cart) {
    store.cart().set(cart);
}

pub fn store_cart(store: &ShopStore) -> Cart {
    store.cart().get()
}

/// Set the price filter; `None` leaves the threshold as it was
pub fn store_set_price_filter(store: &ShopStore, label: String, max_price: Option<Decimal>) {
    if let Some(max) = max_price {
        store.max_price().set(Some(max));
    }
    store.price_label().set(label);
}

pub fn store_max_price(store: &ShopStore) -> Option<Decimal> {
    store.max_price().get()
}

pub fn store_price_label(store: &ShopStore) -> String {
    store.price_label().get()
}

/// Queue a notification and return its id
pub fn store_push_notification(store: &ShopStore, message: &str) -> u32 {
    let id = store.next_notification_id().get_untracked();
    store.next_notification_id().set(id.wrapping_add(1));
    store.notifications().write().push(Notification {
        id,
        message: message.to_string(),
    });
    id
}

/// Remove a notification by ID
pub fn store_dismiss_notification(store: &ShopStore, id: u32) {
    store.notifications().write().retain(|n| n.id != id);
}

pub fn store_notifications(store: &ShopStore) -> Vec<Notification> {
    store.notifications().get()
}

//! Shop Cart Frontend Entry Point

mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod mount;
mod storage;
mod store;

use leptos::reactive::owner::Owner;
use log::LevelFilter;
use wasm_bindgen::prelude::wasm_bindgen;

use config::ShopConfig;
use context::ShopContext;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if console_logger::init_logger("SHOP", level).is_err() {
        web_sys::console::warn_1(&"[SHOP] logger already installed".into());
    }

    let config = ShopConfig::from_document();

    // Root owner for the shared cart state; the page never unmounts it
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ShopContext::new(config);
        mount::mount_shop(ctx);
    });
    std::mem::forget(owner);
}

/// Recent log lines; call `dumpShopLogs()` from the devtools console
#[wasm_bindgen(js_name = dumpShopLogs)]
pub fn dump_shop_logs() -> String {
    console_logger::dump_recent_records()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_before_logger_installed_is_empty() {
        // The app logger is only installed in `main`
        assert!(dump_shop_logs().is_empty());
    }
}

//! Cart Storage
//!
//! Durable storage for the cart: one key holding the JSON array of line
//! items, overwritten whole on every save.

use std::cell::RefCell;

use thiserror::Error;

use crate::models::CartLineItem;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored cart is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Backend the controller persists the cart through
pub trait CartStorage {
    /// Stored line items, or an empty list when nothing is stored
    fn load(&self) -> StorageResult<Vec<CartLineItem>>;

    /// Replace the stored cart
    fn save(&self, items: &[CartLineItem]) -> StorageResult<()>;
}

fn decode(raw: Option<String>) -> StorageResult<Vec<CartLineItem>> {
    match raw {
        // `null` is what JSON.stringify wrote for a missing cart
        Some(json) if json.trim() != "null" => Ok(serde_json::from_str(&json)?),
        _ => Ok(Vec::new()),
    }
}

/// `window.localStorage` backend
pub struct WebCartStorage {
    key: String,
}

impl WebCartStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether localStorage can be opened at all (it throws in some
    /// privacy modes)
    pub fn check_available(&self) -> StorageResult<()> {
        self.storage().map(|_| ())
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl CartStorage for WebCartStorage {
    fn load(&self) -> StorageResult<Vec<CartLineItem>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?;
        decode(raw)
    }

    fn save(&self, items: &[CartLineItem]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory backend holding the same JSON the browser would
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    raw: RefCell<Option<String>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw stored value, valid or not
    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> StorageResult<Vec<CartLineItem>> {
        decode(self.raw())
    }

    fn save(&self, items: &[CartLineItem]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        *self.raw.borrow_mut() = Some(json);
        Ok(())
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn load(&self) -> StorageResult<Vec<CartLineItem>> {
        (**self).load()
    }

    fn save(&self, items: &[CartLineItem]) -> StorageResult<()> {
        (**self).save(items)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn load(&self) -> StorageResult<Vec<CartLineItem>> {
        (**self).load()
    }

    fn save(&self, items: &[CartLineItem]) -> StorageResult<()> {
        (**self).save(items)
    }
}

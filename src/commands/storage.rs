//! localStorage Blob Store
//!
//! The whole checklist lives under one localStorage key.

use grocery_core::{BlobStore, DomainError, DomainResult};

use super::js_error;

#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| DomainError::Storage(js_error(e)))?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

impl BlobStore for BrowserStorage {
    fn load(&self) -> DomainResult<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| DomainError::Storage(js_error(e)))
    }

    fn save(&mut self, blob: &str) -> DomainResult<()> {
        Self::storage()?
            .set_item(&self.key, blob)
            .map_err(|e| DomainError::Storage(js_error(e)))
    }
}

//! In-Memory Blob Store
//!
//! Clones share the same slot, so a test can keep a handle and inspect
//! what the state store wrote.

use std::cell::RefCell;
use std::rc::Rc;

use super::traits::BlobStore;
use crate::domain::DomainResult;

#[derive(Debug, Default)]
struct Slot {
    blob: Option<String>,
    saves: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    slot: Rc<RefCell<Slot>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `blob`, as if a previous session had saved it
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::default();
        store.slot.borrow_mut().blob = Some(blob.into());
        store
    }

    pub fn blob(&self) -> Option<String> {
        self.slot.borrow().blob.clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.slot.borrow().saves
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> DomainResult<Option<String>> {
        Ok(self.blob())
    }

    fn save(&mut self, blob: &str) -> DomainResult<()> {
        let mut slot = self.slot.borrow_mut();
        slot.blob = Some(blob.to_string());
        slot.saves += 1;
        Ok(())
    }
}

//! Repository Layer - Core Traits
//!
//! The persistence medium is an opaque single-blob store.
//! Implementations can use localStorage, a file, memory, etc.

use crate::domain::DomainResult;

/// Single-value blob store holding the serialized checklist
pub trait BlobStore {
    /// Read the persisted blob, `None` when nothing was saved yet
    fn load(&self) -> DomainResult<Option<String>>;

    /// Replace the persisted blob
    fn save(&mut self, blob: &str) -> DomainResult<()>;
}

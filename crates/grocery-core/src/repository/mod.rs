//! Repository Layer
//!
//! Blob store abstraction, its implementations, and the persisted state store.

mod file;
mod memory;
mod state_store;
mod traits;


pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use state_store::{Notice, Notifier, StateStore, CUSTOM_BUCKET_KEY};
pub use traits::BlobStore;

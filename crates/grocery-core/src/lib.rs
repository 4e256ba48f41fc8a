//! Grocery Checklist Core
//!
//! Layered architecture:
//! - domain: item status, records, catalog document, errors
//! - text / key: normalization, collation and key derivation
//! - repository: blob stores and the persisted `StateStore`
//! - merge / grouping / views: catalog merge and the three display lists
//! - dispatcher: user actions → state transitions → re-render

pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod grouping;
pub mod key;
pub mod merge;
pub mod repository;
pub mod text;
pub mod views;

pub use config::AppConfig;
pub use dispatcher::{Action, Dispatcher};
pub use domain::{CatalogDocument, Category, DomainError, DomainResult, ItemPatch, ItemRecord, ItemStatus};
pub use key::{derive_key, ItemKey};
pub use repository::{BlobStore, FileBlobStore, MemoryBlobStore, Notice, Notifier, StateStore};
pub use views::{CatalogEntry, CatalogSection, ListEntry, ListGroup, ListView, Views};

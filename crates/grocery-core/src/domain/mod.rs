//! Domain Layer
//!
//! Contains the checklist entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod catalog;
mod error;
mod record;
mod status;

pub use catalog::{CatalogDocument, Category};
pub use error::{DomainError, DomainResult};
pub use record::{ItemPatch, ItemRecord};
pub use status::ItemStatus;

//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::{CatalogDocument, Views};

/// Everything the components draw, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Latest render of the three lists
    pub views: Views,
    /// Catalog search text
    pub query: String,
    /// Message of the visible toast, if any
    pub toast: Option<String>,
    /// Quick-add selector options: (category id, title)
    pub categories: Vec<(String, String)>,
    /// Category currently chosen in the quick-add selector
    pub quick_add_category: String,
    /// Set once the catalog is loaded and the store warmed up
    pub ready: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_views(store: &UiStore, views: Views) {
    *store.views().write() = views;
}

pub fn store_set_query(store: &UiStore, query: String) {
    *store.query().write() = query;
}

pub fn store_set_toast(store: &UiStore, message: Option<String>) {
    *store.toast().write() = message;
}

pub fn store_set_quick_add_category(store: &UiStore, category_id: String) {
    *store.quick_add_category().write() = category_id;
}

/// Fill the quick-add selector from the document and mark the UI ready
pub fn store_init_catalog(store: &UiStore, document: &CatalogDocument, preferred_category: &str) {
    *store.categories().write() = document
        .aisle_categories()
        .into_iter()
        .map(|c| (c.id.clone(), document.title_for(&c.id).to_string()))
        .collect();
    *store.quick_add_category().write() = document
        .default_quick_add_category(preferred_category)
        .unwrap_or_default()
        .to_string();
    *store.ready().write() = true;
}

pub fn store_views(store: &UiStore) -> Views {
    store.views().get()
}

pub fn store_query_untracked(store: &UiStore) -> String {
    store.query().get_untracked()
}

pub fn store_query(store: &UiStore) -> String {
    store.query().get()
}

pub fn store_toast(store: &UiStore) -> Option<String> {
    store.toast().get()
}

pub fn store_categories(store: &UiStore) -> Vec<(String, String)> {
    store.categories().get()
}

pub fn store_quick_add_category(store: &UiStore) -> String {
    store.quick_add_category().get()
}

pub fn store_quick_add_category_untracked(store: &UiStore) -> String {
    store.quick_add_category().get_untracked()
}

pub fn store_ready(store: &UiStore) -> bool {
    store.ready().get()
}

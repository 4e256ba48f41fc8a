//! Action Dispatcher
//!
//! Maps user interactions to state transitions, then re-renders every view.

use crate::config::AppConfig;
use crate::domain::{CatalogDocument, ItemPatch, ItemStatus};
use crate::key::{derive_key, ItemKey};
use crate::repository::{BlobStore, Notice, StateStore};
use crate::views::{self, Views};

/// Supported user interactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Catalog tap
    ToggleSelect(ItemKey),
    /// To-buy list tap
    MarkBought(ItemKey),
    /// Bought list tap
    Unbuy(ItemKey),
    /// Quick-add form submission; an empty category means the configured default
    QuickAdd { name: String, category_id: String },
    ClearBought,
    ResetAll,
}

/// Owns the store and the catalog document for the lifetime of the page
pub struct Dispatcher<B: BlobStore> {
    store: StateStore<B>,
    document: CatalogDocument,
    config: AppConfig,
}

impl<B: BlobStore> Dispatcher<B> {
    /// Boot: adopt the loaded store and document, then warm the store up
    pub fn new(mut store: StateStore<B>, document: CatalogDocument, config: AppConfig) -> Self {
        store.warm_up(&document);
        log::info!(
            "Checklist ready: {} categories, {} records",
            document.categories.len(),
            store.len()
        );
        Self { store, document, config }
    }

    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `action` and re-render every view for `query`
    pub fn dispatch(&mut self, action: Action, query: &str) -> Views {
        self.apply(action);
        self.render(query)
    }

    /// Warm-up pass followed by a full render
    pub fn render(&mut self, query: &str) -> Views {
        self.store.warm_up(&self.document);
        views::render(&self.document, &self.store, query)
    }

    /// Apply `action` to the store. Returns false when it was a no-op.
    ///
    /// MarkBought, Unbuy and QuickAdd force their target status whatever the
    /// current one is.
    pub fn apply(&mut self, action: Action) -> bool {
        log::debug!("Dispatching {:?}", action);
        match action {
            Action::ToggleSelect(key) => {
                let next = self.store.get(&key).status.toggled();
                self.store.patch(key, ItemPatch::status(next));
                true
            }
            Action::MarkBought(key) => {
                self.store.patch(key, ItemPatch::status(ItemStatus::Bought));
                true
            }
            Action::Unbuy(key) => {
                self.store.patch(key, ItemPatch::status(ItemStatus::ToBuy));
                true
            }
            Action::QuickAdd { name, category_id } => self.quick_add(&name, &category_id),
            Action::ClearBought => {
                let cleared = self.store.clear_bought();
                log::debug!("Cleared {} bought items", cleared);
                true
            }
            Action::ResetAll => {
                self.store.reset_all();
                true
            }
        }
    }

    fn quick_add(&mut self, raw_name: &str, category_id: &str) -> bool {
        let name = raw_name.trim();
        if name.is_empty() {
            return false;
        }
        let category_id = match category_id.trim() {
            "" => self.config.default_category.clone(),
            id => id.to_string(),
        };
        if let Err(e) = self.store.add_custom_item(&category_id, name) {
            log::warn!("Quick-add rejected: {}", e);
            return false;
        }
        let key = derive_key(&category_id, name);
        self.store.patch(
            key,
            ItemPatch::status(ItemStatus::ToBuy)
                .with_name(name)
                .with_category(category_id),
        );
        self.store.notify(Notice::AddedToBuy);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::repository::MemoryBlobStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn document() -> CatalogDocument {
        CatalogDocument {
            schema_version: 1,
            store_aisle_order: vec!["épicerie".into(), "crèmerie".into()],
            categories: vec![
                Category::new("épicerie", "Épicerie", &["Pain", "Riz"]),
                Category::new("crèmerie", "Crèmerie", &["Lait"]),
            ],
        }
    }

    fn dispatcher() -> Dispatcher<MemoryBlobStore> {
        Dispatcher::new(StateStore::open(MemoryBlobStore::new()), document(), AppConfig::default())
    }

    fn status(d: &Dispatcher<MemoryBlobStore>, cat: &str, name: &str) -> ItemStatus {
        d.store().get(&derive_key(cat, name)).status
    }

    #[test]
    fn test_boot_warms_up_document_items() {
        let d = dispatcher();
        assert_eq!(d.store().len(), 3);
        assert_eq!(d.store().get(&derive_key("crèmerie", "Lait")).name.as_deref(), Some("Lait"));
    }

    #[test]
    fn test_toggle_select_cycle() {
        let mut d = dispatcher();
        let key = derive_key("épicerie", "Pain");
        d.apply(Action::ToggleSelect(key.clone()));
        assert_eq!(status(&d, "épicerie", "Pain"), ItemStatus::ToBuy);
        d.apply(Action::ToggleSelect(key.clone()));
        assert_eq!(status(&d, "épicerie", "Pain"), ItemStatus::Neutral);

        d.apply(Action::MarkBought(key.clone()));
        d.apply(Action::ToggleSelect(key));
        assert_eq!(status(&d, "épicerie", "Pain"), ItemStatus::ToBuy);
    }

    #[test]
    fn test_mark_bought_and_unbuy_force_status() {
        let mut d = dispatcher();
        let key = derive_key("crèmerie", "Lait");
        d.apply(Action::MarkBought(key.clone()));
        assert_eq!(status(&d, "crèmerie", "Lait"), ItemStatus::Bought);
        d.apply(Action::Unbuy(key.clone()));
        assert_eq!(status(&d, "crèmerie", "Lait"), ItemStatus::ToBuy);

        // Unbuy on a neutral item still forces ToBuy
        let rice = derive_key("épicerie", "Riz");
        d.apply(Action::Unbuy(rice));
        assert_eq!(status(&d, "épicerie", "Riz"), ItemStatus::ToBuy);
    }

    #[test]
    fn test_dispatch_rerenders_all_views() {
        let mut d = dispatcher();
        let views = d.dispatch(Action::ToggleSelect(derive_key("épicerie", "Riz")), "");
        assert_eq!(views.to_buy.groups()[0].entries[0].name, "Riz");
        assert!(views.bought.is_placeholder());
        assert_eq!(views.catalog[0].summary(), "1 à acheter");
    }

    #[test]
    fn test_quick_add_creates_custom_item_to_buy() {
        let mut d = dispatcher();
        assert!(d.apply(Action::QuickAdd {
            name: "  Kéfir ".to_string(),
            category_id: "crèmerie".to_string(),
        }));
        assert_eq!(d.store().custom_items("crèmerie"), &["Kéfir".to_string()]);
        let record = d.store().get(&derive_key("crèmerie", "Kéfir"));
        assert_eq!(record.status, ItemStatus::ToBuy);
        assert_eq!(record.name.as_deref(), Some("Kéfir"));
        assert_eq!(record.category_id.as_deref(), Some("crèmerie"));
    }

    #[test]
    fn test_quick_add_forces_to_buy_on_bought_item() {
        let mut d = dispatcher();
        d.apply(Action::MarkBought(derive_key("épicerie", "Pain")));
        d.apply(Action::QuickAdd {
            name: "pain".to_string(),
            category_id: "épicerie".to_string(),
        });
        let record = d.store().get(&derive_key("épicerie", "Pain"));
        assert_eq!(record.status, ItemStatus::ToBuy);
        assert_eq!(record.name.as_deref(), Some("pain"));
        // Same normalized name as a document item: still rendered once
        let views = d.render("");
        assert_eq!(views.catalog[0].entries.len(), 2);
    }

    #[test]
    fn test_quick_add_blank_is_a_no_op() {
        let blob = MemoryBlobStore::new();
        let mut d = Dispatcher::new(StateStore::open(blob.clone()), document(), AppConfig::default());
        let saves = blob.save_count();
        let before = d.store().to_json().unwrap();

        assert!(!d.apply(Action::QuickAdd {
            name: "   \t ".to_string(),
            category_id: "épicerie".to_string(),
        }));
        assert_eq!(blob.save_count(), saves);
        assert_eq!(d.store().to_json().unwrap(), before);
        let views = d.render("");
        assert!(views.to_buy.is_placeholder());
        assert!(d.store().custom_items("épicerie").is_empty());
    }

    #[test]
    fn test_quick_add_without_category_uses_default() {
        let mut d = dispatcher();
        d.apply(Action::QuickAdd {
            name: "Sel".to_string(),
            category_id: String::new(),
        });
        assert_eq!(status(&d, "épicerie", "Sel"), ItemStatus::ToBuy);
    }

    #[test]
    fn test_clear_bought_only_touches_bought() {
        let mut d = dispatcher();
        d.apply(Action::MarkBought(derive_key("épicerie", "Pain")));
        d.apply(Action::ToggleSelect(derive_key("épicerie", "Riz")));
        d.apply(Action::ClearBought);
        assert_eq!(status(&d, "épicerie", "Pain"), ItemStatus::Neutral);
        assert_eq!(status(&d, "épicerie", "Riz"), ItemStatus::ToBuy);
        assert_eq!(status(&d, "crèmerie", "Lait"), ItemStatus::Neutral);
    }

    #[test]
    fn test_reset_rebuilds_from_document() {
        let mut d = dispatcher();
        d.apply(Action::QuickAdd {
            name: "Kéfir".to_string(),
            category_id: "crèmerie".to_string(),
        });
        d.apply(Action::MarkBought(derive_key("épicerie", "Pain")));

        let views = d.dispatch(Action::ResetAll, "");
        assert!(d.store().custom_items("crèmerie").is_empty());
        assert_eq!(d.store().len(), 3);
        assert_eq!(status(&d, "épicerie", "Pain"), ItemStatus::Neutral);
        assert!(views.to_buy.is_placeholder());
        assert!(views.bought.is_placeholder());
    }

    #[test]
    fn test_notices_follow_actions() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let store = StateStore::open(MemoryBlobStore::new()).with_notifier(move |n| sink.borrow_mut().push(n));
        let mut d = Dispatcher::new(store, document(), AppConfig::default());
        assert!(seen.borrow().is_empty());

        d.apply(Action::QuickAdd {
            name: "Kéfir".to_string(),
            category_id: "crèmerie".to_string(),
        });
        assert_eq!(seen.borrow().as_slice(), &[Notice::Saved, Notice::AddedToBuy]);

        d.apply(Action::ResetAll);
        assert_eq!(seen.borrow().last(), Some(&Notice::Reset));
    }
}

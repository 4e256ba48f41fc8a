//! Persisted State Store
//!
//! Item records keyed by `ItemKey` plus the custom-items bucket. Every
//! mutation ends with a synchronous commit of the whole store.

use indexmap::IndexMap;
use serde::Serialize;

use super::traits::BlobStore;
use crate::domain::{CatalogDocument, DomainError, DomainResult, ItemPatch, ItemRecord, ItemStatus};
use crate::key::{derive_key, ItemKey};
use crate::merge;
use crate::text::normalize;

/// Reserved top-level key of the custom-items bucket inside the blob
pub const CUSTOM_BUCKET_KEY: &str = "__custom";

/// Transient confirmation shown to the user after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    AddedToBuy,
    Reset,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Sauvegardé",
            Notice::AddedToBuy => "Ajouté à \"À acheter\"",
            Notice::Reset => "Réinitialisé",
        }
    }
}

/// Receives notices; the UI turns them into auto-dismissing toasts
pub type Notifier = Box<dyn Fn(Notice)>;

/// Serialized shape: `{"<itemKey>": {...}, "__custom": {"<catId>": [...]}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct PersistedState {
    #[serde(flatten)]
    records: IndexMap<ItemKey, ItemRecord>,
    #[serde(rename = "__custom")]
    custom: IndexMap<String, Vec<String>>,
}

impl PersistedState {
    /// Decode a saved blob record by record.
    ///
    /// Only a non-object top level fails; a malformed record is skipped and a
    /// malformed custom bucket entry is dropped, the rest is kept.
    fn from_json(raw: &str) -> DomainResult<Self> {
        let entries: IndexMap<String, serde_json::Value> = serde_json::from_str(raw)?;
        let mut state = PersistedState::default();
        for (key, value) in entries {
            if key == CUSTOM_BUCKET_KEY {
                state.custom = custom_bucket_from_value(value);
                continue;
            }
            match serde_json::from_value::<ItemRecord>(value) {
                Ok(record) => {
                    state.records.insert(ItemKey::from(key), record);
                }
                Err(e) => log::warn!("Skipping unreadable record {}: {}", key, e),
            }
        }
        Ok(state)
    }
}

fn custom_bucket_from_value(value: serde_json::Value) -> IndexMap<String, Vec<String>> {
    let serde_json::Value::Object(categories) = value else {
        log::warn!("Ignoring malformed {} bucket", CUSTOM_BUCKET_KEY);
        return IndexMap::new();
    };
    categories
        .into_iter()
        .filter_map(|(category_id, names)| match names {
            serde_json::Value::Array(names) => {
                let names = names
                    .into_iter()
                    .filter_map(|n| n.as_str().map(str::to_string))
                    .collect();
                Some((category_id, names))
            }
            _ => {
                log::warn!("Ignoring malformed custom items of {}", category_id);
                None
            }
        })
        .collect()
}

pub struct StateStore<B: BlobStore> {
    blob: B,
    state: PersistedState,
    notifier: Option<Notifier>,
}

impl<B: BlobStore> StateStore<B> {
    /// Load the store from `blob`; missing or corrupt data yields an empty store
    pub fn open(blob: B) -> Self {
        let state = match blob.load() {
            Ok(Some(raw)) => match PersistedState::from_json(&raw) {
                Ok(state) => {
                    log::debug!("Loaded {} item records", state.records.len());
                    state
                }
                Err(e) => {
                    log::warn!("Discarding unreadable checklist state: {}", e);
                    PersistedState::default()
                }
            },
            Ok(None) => PersistedState::default(),
            Err(e) => {
                log::warn!("Checklist state unavailable, starting empty: {}", e);
                PersistedState::default()
            }
        };
        Self {
            blob,
            state,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: impl Fn(Notice) + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn blob_store(&self) -> &B {
        &self.blob
    }

    // ========================
    // Reads
    // ========================

    /// Current state of `key`; an unknown key reads as a Neutral record with no name
    pub fn get(&self, key: &ItemKey) -> ItemRecord {
        self.state.records.get(key).cloned().unwrap_or_default()
    }

    pub fn record(&self, key: &ItemKey) -> Option<&ItemRecord> {
        self.state.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.state.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = (&ItemKey, &ItemRecord)> {
        self.state.records.iter()
    }

    /// Keys whose status is `status`, in insertion order
    pub fn keys_with_status(&self, status: ItemStatus) -> Vec<ItemKey> {
        self.state
            .records
            .iter()
            .filter(|(_, r)| r.status == status)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Number of records of `category_id` currently in `status`
    pub fn count_in_category(&self, category_id: &str, status: ItemStatus) -> usize {
        self.state
            .records
            .values()
            .filter(|r| r.status == status && r.category_id.as_deref() == Some(category_id))
            .count()
    }

    /// User-added names of a category, in insertion order
    pub fn custom_items(&self, category_id: &str) -> &[String] {
        self.state
            .custom
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Serialized form of the whole store
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    // ========================
    // Mutations
    // ========================

    /// Create `key` if absent, merge `patch`, persist, confirm
    pub fn patch(&mut self, key: ItemKey, patch: ItemPatch) {
        self.state.records.entry(key).or_default().apply(patch);
        self.commit();
        self.notify(Notice::Saved);
    }

    /// Drop every record and the custom bucket.
    ///
    /// The caller must rebuild document-derived state afterwards (see `warm_up`).
    pub fn reset_all(&mut self) {
        log::info!("Resetting checklist ({} records)", self.state.records.len());
        self.state = PersistedState::default();
        self.commit();
        self.notify(Notice::Reset);
    }

    /// Every Bought record goes back to Neutral; one commit for the whole batch.
    /// Returns how many records changed.
    pub fn clear_bought(&mut self) -> usize {
        let mut cleared = 0;
        for record in self.state.records.values_mut() {
            if record.status == ItemStatus::Bought {
                record.status = ItemStatus::Neutral;
                cleared += 1;
            }
        }
        self.commit();
        self.notify(Notice::Saved);
        cleared
    }

    /// Register a user-added item name under `category_id`.
    ///
    /// Blank names are rejected without touching the store. A name already in
    /// the bucket (ignoring case and accents) is accepted without a second entry.
    pub fn add_custom_item(&mut self, category_id: &str, raw_name: &str) -> DomainResult<()> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is blank".to_string()));
        }
        let wanted = normalize(name);
        let bucket = self.state.custom.entry(category_id.to_string()).or_default();
        if bucket.iter().any(|existing| normalize(existing) == wanted) {
            return Ok(());
        }
        bucket.push(name.to_string());
        self.commit();
        Ok(())
    }

    /// Materialize a record for every catalog item (document + custom) not yet
    /// present and fill a missing name or category on existing ones.
    ///
    /// Idempotent: a second run changes nothing. Persists only when something
    /// changed. Returns the number of records created or completed.
    pub fn warm_up(&mut self, document: &CatalogDocument) -> usize {
        let mut touched = 0;
        for category in &document.categories {
            let names = merge::merged_items(category, self.custom_items(&category.id));
            for name in names {
                let key = derive_key(&category.id, &name);
                let record = self.state.records.entry(key).or_default();
                let mut changed = false;
                if record.name.is_none() {
                    record.name = Some(name);
                    changed = true;
                }
                if record.category_id.is_none() {
                    record.category_id = Some(category.id.clone());
                    changed = true;
                }
                if changed {
                    touched += 1;
                }
            }
        }
        if touched > 0 {
            log::debug!("Warm-up materialized {} records", touched);
            self.commit();
        }
        touched
    }

    /// Emit a notice to the registered notifier, if any
    pub fn notify(&self, notice: Notice) {
        if let Some(notifier) = &self.notifier {
            notifier(notice);
        }
    }

    /// Persist the whole store. Failures are logged, never raised.
    fn commit(&mut self) {
        let result = self.to_json().and_then(|json| self.blob.save(&json));
        if let Err(e) = result {
            log::warn!("Failed to persist checklist state: {}", e);
        }
    }
}

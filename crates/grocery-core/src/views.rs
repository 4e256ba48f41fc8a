//! View Model
//!
//! Pure functions from (document, store, query) to the three display lists.
//! Run `StateStore::warm_up` first so every catalog item has a record.

use crate::domain::{CatalogDocument, ItemStatus};
use crate::grouping::group_by_category;
use crate::key::{derive_key, ItemKey};
use crate::merge::merged_items;
use crate::repository::{BlobStore, StateStore};
use crate::text::{matches_normalized, normalize};

pub const STATUS_LINE: &str = "Sauvegarde locale • Tap catalogue = À acheter • Tap À acheter = Acheté";
pub const CATALOG_TAP_HINT: &str = "Tap = ajouter/enlever \"À acheter\".";
pub const TO_BUY_PLACEHOLDER: &str =
    "Tape un article dans le Catalogue (ou via Ajout rapide) pour l'ajouter ici. Re-tape ici pour le passer en Acheté.";
pub const BOUGHT_PLACEHOLDER: &str =
    "Les articles passés en Acheté apparaissent ici, triés par tes rayons.";

/// One item line of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: ItemKey,
    pub name: String,
    pub status: ItemStatus,
}

impl CatalogEntry {
    pub fn badge(&self) -> Option<&'static str> {
        self.status.badge()
    }
}

/// One category card of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub category_id: String,
    pub title: String,
    /// Records of this category currently to buy (independent of the search)
    pub to_buy_count: usize,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogSection {
    pub fn summary(&self) -> String {
        if self.to_buy_count > 0 {
            format!("{} à acheter", self.to_buy_count)
        } else {
            "—".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub key: ItemKey,
    pub name: String,
}

/// Items of one category in the to-buy or bought list
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup {
    pub category_id: String,
    pub title: String,
    pub entries: Vec<ListEntry>,
}

impl ListGroup {
    pub fn bought_summary(&self) -> String {
        format!("{} acheté(s)", self.entries.len())
    }
}

/// A grouped list, or a hint when there is nothing to show
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Placeholder(&'static str),
    Groups(Vec<ListGroup>),
}

impl ListView {
    pub fn groups(&self) -> &[ListGroup] {
        match self {
            ListView::Placeholder(_) => &[],
            ListView::Groups(groups) => groups,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListView::Placeholder(_))
    }
}

/// Everything the UI draws after a state change
#[derive(Debug, Clone, PartialEq)]
pub struct Views {
    pub catalog: Vec<CatalogSection>,
    pub to_buy: ListView,
    pub bought: ListView,
}

impl Default for Views {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            to_buy: ListView::Placeholder(TO_BUY_PLACEHOLDER),
            bought: ListView::Placeholder(BOUGHT_PLACEHOLDER),
        }
    }
}

pub fn render<B: BlobStore>(document: &CatalogDocument, store: &StateStore<B>, query: &str) -> Views {
    Views {
        catalog: render_catalog(document, store, query),
        to_buy: render_status_list(document, store, ItemStatus::ToBuy, TO_BUY_PLACEHOLDER),
        bought: render_status_list(document, store, ItemStatus::Bought, BOUGHT_PLACEHOLDER),
    }
}

/// Catalog cards in aisle order, items filtered by `query`
pub fn render_catalog<B: BlobStore>(
    document: &CatalogDocument,
    store: &StateStore<B>,
    query: &str,
) -> Vec<CatalogSection> {
    let query = normalize(query);
    document
        .ordered_categories()
        .into_iter()
        .filter_map(|category| {
            let entries: Vec<CatalogEntry> = merged_items(category, store.custom_items(&category.id))
                .into_iter()
                .filter(|name| matches_normalized(name, &query))
                .map(|name| {
                    let key = derive_key(&category.id, &name);
                    let status = store.get(&key).status;
                    CatalogEntry { key, name, status }
                })
                .collect();
            if entries.is_empty() {
                return None;
            }
            Some(CatalogSection {
                category_id: category.id.clone(),
                title: document.title_for(&category.id).to_string(),
                to_buy_count: store.count_in_category(&category.id, ItemStatus::ToBuy),
                entries,
            })
        })
        .collect()
}

pub fn render_to_buy<B: BlobStore>(document: &CatalogDocument, store: &StateStore<B>) -> ListView {
    render_status_list(document, store, ItemStatus::ToBuy, TO_BUY_PLACEHOLDER)
}

pub fn render_bought<B: BlobStore>(document: &CatalogDocument, store: &StateStore<B>) -> ListView {
    render_status_list(document, store, ItemStatus::Bought, BOUGHT_PLACEHOLDER)
}

fn render_status_list<B: BlobStore>(
    document: &CatalogDocument,
    store: &StateStore<B>,
    status: ItemStatus,
    placeholder: &'static str,
) -> ListView {
    let keys = store.keys_with_status(status);
    let groups: Vec<ListGroup> = group_by_category(&keys, &document.store_aisle_order, |k| store.record(k))
        .into_iter()
        .map(|(category_id, keys)| ListGroup {
            title: document.title_for(&category_id).to_string(),
            entries: keys
                .into_iter()
                .map(|key| {
                    let name = store.get(&key).display_name().to_string();
                    ListEntry { key, name }
                })
                .collect(),
            category_id,
        })
        .collect();
    if groups.is_empty() {
        ListView::Placeholder(placeholder)
    } else {
        ListView::Groups(groups)
    }
}

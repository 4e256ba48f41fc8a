//! Catalog Document
//!
//! Static category/item definitions fetched once at boot.

use serde::{Deserialize, Serialize};

use super::error::DomainResult;

/// Aisle order used when the catalog document cannot be loaded
const FALLBACK_AISLE_ORDER: &[&str] = &[
    "droguerie",
    "bazar",
    "animalerie",
    "hygiène",
    "liquides",
    "apéro",
    "épicerie",
    "crèmerie",
    "charcuterie",
    "fruits et légumes",
    "poissonnerie",
    "boucherie",
    "surgelés",
];

/// A store aisle and the items it offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The whole catalog: aisle order plus categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub store_aisle_order: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

fn default_schema_version() -> u32 {
    1
}

impl CatalogDocument {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in document: fixed aisle order, no categories
    pub fn fallback() -> Self {
        Self {
            schema_version: 1,
            store_aisle_order: FALLBACK_AISLE_ORDER.iter().map(|s| s.to_string()).collect(),
            categories: Vec::new(),
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display title of a category id, the raw id when unresolved or untitled
    pub fn title_for<'a>(&'a self, id: &'a str) -> &'a str {
        match self.category(id) {
            Some(cat) if !cat.title.is_empty() => &cat.title,
            _ => id,
        }
    }

    /// Categories in aisle order first, then the remaining ones in document order
    pub fn ordered_categories(&self) -> Vec<&Category> {
        let mut ordered = self.aisle_categories();
        for cat in &self.categories {
            if !self.store_aisle_order.contains(&cat.id) {
                ordered.push(cat);
            }
        }
        ordered
    }

    /// Categories offered by the quick-add selector (aisle order ids present in the document)
    pub fn aisle_categories(&self) -> Vec<&Category> {
        let mut ordered: Vec<&Category> = Vec::new();
        for id in &self.store_aisle_order {
            if ordered.iter().any(|c| &c.id == id) {
                continue;
            }
            if let Some(cat) = self.category(id) {
                ordered.push(cat);
            }
        }
        ordered
    }

    /// Preselected quick-add category: `preferred` if offered, else the first offered
    pub fn default_quick_add_category(&self, preferred: &str) -> Option<&str> {
        let offered = self.aisle_categories();
        offered
            .iter()
            .copied()
            .find(|c| c.id == preferred)
            .or_else(|| offered.first().copied())
            .map(|c| c.id.as_str())
    }
}

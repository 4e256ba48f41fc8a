//! Item Key Derivation
//!
//! Keys are persisted, so the derivation must never change.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Stable identifier of an item record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ItemKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// `i__<category>__<name>`, lowercased, whitespace runs collapsed to `_`
pub fn derive_key(category_id: &str, name: &str) -> ItemKey {
    let raw = format!("i__{}__{}", category_id, name).to_lowercase();
    ItemKey(WHITESPACE_RUN.replace_all(&raw, "_").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_format() {
        assert_eq!(derive_key("fruits et légumes", "Pomme de terre").as_str(), "i__fruits_et_légumes__pomme_de_terre");
        assert_eq!(derive_key("épicerie", "Pain").as_str(), "i__épicerie__pain");
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        assert_eq!(derive_key("crèmerie", "Lait"), derive_key("crèmerie", "Lait"));
    }

    #[test]
    fn test_case_and_whitespace_runs_collide() {
        assert_eq!(derive_key("épicerie", "Huile  d'olive"), derive_key("épicerie", "huile d'olive"));
        assert_ne!(derive_key("épicerie", "Lait"), derive_key("crèmerie", "Lait"));
    }

    #[test]
    fn test_unicode_whitespace_is_collapsed() {
        assert_eq!(derive_key("bazar", "Sac\u{a0}poubelle").as_str(), "i__bazar__sac_poubelle");
    }
}

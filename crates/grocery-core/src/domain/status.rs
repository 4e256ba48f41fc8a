//! Item Status
//!
//! Persisted as a number: 0 = neutral, 1 = to buy, 2 = bought.

use serde::{Deserialize, Serialize};

/// Where an item stands in the shopping trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "u8")]
pub enum ItemStatus {
    /// Untouched
    #[default]
    Neutral,
    /// Selected for purchase
    ToBuy,
    /// Purchase complete
    Bought,
}

impl ItemStatus {
    /// Catalog tap: Neutral → ToBuy, ToBuy → Neutral, Bought → ToBuy
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Neutral => ItemStatus::ToBuy,
            ItemStatus::ToBuy => ItemStatus::Neutral,
            ItemStatus::Bought => ItemStatus::ToBuy,
        }
    }

    /// Badge shown next to an item in the catalog
    pub fn badge(self) -> Option<&'static str> {
        match self {
            ItemStatus::Neutral => None,
            ItemStatus::ToBuy => Some("• À acheter"),
            ItemStatus::Bought => Some("✓ Acheté"),
        }
    }
}

impl From<u8> for ItemStatus {
    // Unknown numbers come from foreign or corrupted blobs; they read as untouched.
    fn from(value: u8) -> Self {
        match value {
            1 => ItemStatus::ToBuy,
            2 => ItemStatus::Bought,
            _ => ItemStatus::Neutral,
        }
    }
}

impl From<serde_json::Value> for ItemStatus {
    // Anything but 1 or 2 (null, negative, out of range, text) reads as untouched.
    fn from(value: serde_json::Value) -> Self {
        match value.as_f64() {
            Some(n) if n == 1.0 => ItemStatus::ToBuy,
            Some(n) if n == 2.0 => ItemStatus::Bought,
            _ => ItemStatus::Neutral,
        }
    }
}

impl From<ItemStatus> for u8 {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Neutral => 0,
            ItemStatus::ToBuy => 1,
            ItemStatus::Bought => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        assert_eq!(ItemStatus::Neutral.toggled(), ItemStatus::ToBuy);
        assert_eq!(ItemStatus::ToBuy.toggled(), ItemStatus::Neutral);
        assert_eq!(ItemStatus::Bought.toggled(), ItemStatus::ToBuy);
    }

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(serde_json::to_string(&ItemStatus::Bought).unwrap(), "2");
        let status: ItemStatus = serde_json::from_str("1").unwrap();
        assert_eq!(status, ItemStatus::ToBuy);
    }

    #[test]
    fn test_unknown_number_reads_as_neutral() {
        let status: ItemStatus = serde_json::from_str("7").unwrap();
        assert_eq!(status, ItemStatus::Neutral);
    }

    #[test]
    fn test_malformed_status_reads_as_neutral() {
        for raw in ["-1", "256", "1.5", "null", "\"1\"", "[]"] {
            let status: ItemStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, ItemStatus::Neutral, "status {}", raw);
        }
        let status: ItemStatus = serde_json::from_str("2.0").unwrap();
        assert_eq!(status, ItemStatus::Bought);
    }

    #[test]
    fn test_badges() {
        assert_eq!(ItemStatus::Neutral.badge(), None);
        assert_eq!(ItemStatus::ToBuy.badge(), Some("• À acheter"));
        assert_eq!(ItemStatus::Bought.badge(), Some("✓ Acheté"));
    }
}

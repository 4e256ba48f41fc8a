//! Application Configuration
//!
//! Every field has a default so a partial JSON override is enough.

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

/// Runtime settings shared by the core and the browser shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key of the single persisted blob
    pub storage_key: String,
    /// Where the catalog document is fetched from
    pub catalog_url: String,
    /// How long a confirmation toast stays visible
    pub toast_duration_ms: u32,
    /// Category preselected in (and used as fallback by) the quick-add form
    pub default_category: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "courses_bring_like_v3".to_string(),
            catalog_url: "./grocery_data.json".to_string(),
            toast_duration_ms: 650,
            default_category: "épicerie".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"toast_duration_ms": 1200}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 1200);
        assert_eq!(config.storage_key, "courses_bring_like_v3");
        assert_eq!(config.default_category, "épicerie");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}

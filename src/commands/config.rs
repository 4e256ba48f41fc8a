//! Configuration Loading
//!
//! Optional JSON override embedded in the page:
//! `<script id="grocery-config" type="application/json">{...}</script>`

use grocery_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "grocery-config";

pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            AppConfig::default()
        }
    }
}

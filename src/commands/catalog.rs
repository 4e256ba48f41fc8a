//! Catalog Fetch
//!
//! One request at boot; the caller substitutes the fallback document on error.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use grocery_core::CatalogDocument;

use super::js_error;

pub async fn fetch_catalog(url: &str) -> Result<CatalogDocument, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("fetch failed: HTTP {}", response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = body.as_string().ok_or("catalog body is not text")?;
    CatalogDocument::from_json(&body).map_err(|e| e.to_string())
}

/// Fetch the catalog, falling back to the built-in document on any failure
pub async fn load_catalog(url: &str) -> CatalogDocument {
    match fetch_catalog(url).await {
        Ok(document) => {
            log::info!("Loaded catalog from {} ({} categories)", url, document.categories.len());
            document
        }
        Err(e) => {
            log::warn!("Catalog unavailable ({}), using fallback", e);
            CatalogDocument::fallback()
        }
    }
}

//! Toast Component
//!
//! Transient confirmation; dismissal is scheduled by `AppContext::notify`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            id="toast"
            class=move || if store::store_toast(&ctx.ui).is_some() { "toast show" } else { "toast" }
        >
            {move || store::store_toast(&ctx.ui).unwrap_or_default()}
        </div>
    }
}

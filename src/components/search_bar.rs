//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store;

/// Catalog filter; every keystroke re-renders synchronously
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <input
            id="q"
            type="search"
            placeholder="Rechercher un article…"
            autocomplete="off"
            prop:value=move || store::store_query(&ctx.ui)
            on:input=move |ev| {
                store::store_set_query(&ctx.ui, event_target_value(&ev));
                ctx.rerender();
            }
        />
    }
}

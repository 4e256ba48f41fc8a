//! Catalog View Component
//!
//! One card per category; tapping an item toggles it in "À acheter".

use leptos::prelude::*;

use grocery_core::{views::CATALOG_TAP_HINT, Action, CatalogSection};

use crate::context::use_app_context;
use crate::store;

#[component]
pub fn CatalogView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="catalog">
            {move || {
                store::store_views(&ctx.ui)
                    .catalog
                    .into_iter()
                    .map(|section| view! { <CatalogCard section=section /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn CatalogCard(section: CatalogSection) -> impl IntoView {
    let ctx = use_app_context();
    let summary = section.summary();

    let items = section
        .entries
        .into_iter()
        .map(|entry| {
            let badge = entry.badge();
            let key = entry.key;
            view! {
                <li
                    class="item"
                    on:click=move |_| ctx.dispatch(Action::ToggleSelect(key.clone()))
                >
                    <span class="name">{entry.name}</span>
                    {badge.map(|b| view! { <span class="badge">{b}</span> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card" data-category=section.category_id>
            <header class="cardHeader">
                <h3>{section.title}</h3>
                <span class="summary">{summary}</span>
            </header>
            <p class="hint">{CATALOG_TAP_HINT}</p>
            <ul class="items">{items}</ul>
        </section>
    }
}

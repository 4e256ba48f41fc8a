//! Bought List Component
//!
//! Items with status "Acheté", one card per aisle. Tap puts them back.

use leptos::prelude::*;

use grocery_core::{Action, ListGroup, ListView};

use crate::context::use_app_context;
use crate::store;

#[component]
pub fn BoughtList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="bought">
            {move || match store::store_views(&ctx.ui).bought {
                ListView::Placeholder(hint) => view! { <p class="muted">{hint}</p> }.into_any(),
                ListView::Groups(groups) => groups
                    .into_iter()
                    .map(|group| view! { <BoughtCard group=group /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn BoughtCard(group: ListGroup) -> impl IntoView {
    let ctx = use_app_context();
    let summary = group.bought_summary();

    let rows = group
        .entries
        .into_iter()
        .map(|entry| {
            let key = entry.key;
            view! {
                <li
                    class="row bought"
                    on:click=move |_| ctx.dispatch(Action::Unbuy(key.clone()))
                >
                    <span class="name strike">{entry.name}</span>
                    <span class="pill">"↩︎"</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card" data-category=group.category_id>
            <header class="cardHeader">
                <h3>{group.title}</h3>
                <span class="summary">{summary}</span>
            </header>
            <ul class="rows">{rows}</ul>
        </section>
    }
}

//! To-Buy List Component
//!
//! Items with status "À acheter", grouped by aisle. Tap marks as bought.

use leptos::prelude::*;

use grocery_core::{Action, ListGroup, ListView};

use crate::context::use_app_context;
use crate::store;

#[component]
pub fn ToBuyList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="toBuy">
            {move || match store::store_views(&ctx.ui).to_buy {
                ListView::Placeholder(hint) => view! { <p class="muted">{hint}</p> }.into_any(),
                ListView::Groups(groups) => groups
                    .into_iter()
                    .enumerate()
                    .map(|(index, group)| view! { <ToBuyGroup group=group first={index == 0} /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ToBuyGroup(group: ListGroup, first: bool) -> impl IntoView {
    let ctx = use_app_context();

    let rows = group
        .entries
        .into_iter()
        .map(|entry| {
            let key = entry.key;
            view! {
                <li
                    class="row"
                    on:click=move |_| ctx.dispatch(Action::MarkBought(key.clone()))
                >
                    <span class="name">{entry.name}</span>
                    <span class="pill">"→ Acheté"</span>
                </li>
            }
        })
        .collect_view();

    view! {
        {(!first).then(|| view! { <div class="categorySeparator"></div> })}
        <div class="group" data-category=group.category_id>
            <h4 class="groupTitle">{group.title}</h4>
            <ul class="rows">{rows}</ul>
        </div>
    }
}

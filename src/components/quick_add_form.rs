//! Quick Add Form Component
//!
//! Free-text item + category selector. Enter or the button submits.

use leptos::prelude::*;

use grocery_core::Action;

use crate::context::use_app_context;
use crate::store;

#[component]
pub fn QuickAddForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_text.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let category_id = store::store_quick_add_category_untracked(&ctx.ui);
        ctx.dispatch(Action::QuickAdd { name, category_id });
        set_new_text.set(String::new());
    };

    view! {
        <form class="quickAdd" on:submit=submit>
            <input
                id="qaText"
                type="text"
                placeholder="Ajout rapide…"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <select
                id="qaCat"
                on:change=move |ev| store::store_set_quick_add_category(&ctx.ui, event_target_value(&ev))
            >
                {move || {
                    let selected = store::store_quick_add_category(&ctx.ui);
                    store::store_categories(&ctx.ui)
                        .into_iter()
                        .map(|(id, title)| {
                            let is_selected = id == selected;
                            view! { <option value=id selected=is_selected>{title}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <button id="qaBtn" type="submit">"Ajouter"</button>
        </form>
    }
}

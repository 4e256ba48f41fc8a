//! Toolbar Component
//!
//! Clear-bought and reset controls.

use leptos::prelude::*;

use grocery_core::Action;

use crate::components::ConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toolbar">
            <button class="btn" on:click=move |_| ctx.dispatch(Action::ClearBought)>
                "Vider « Acheté »"
            </button>
            <ConfirmButton
                button_class="btn danger"
                label="Réinitialiser"
                on_confirm=Callback::new(move |_| ctx.dispatch(Action::ResetAll))
            />
        </div>
    }
}

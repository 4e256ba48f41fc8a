//! Grocery List Frontend App
//!
//! Single page: search, quick add, the two shopping lists, then the catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use grocery_core::views::STATUS_LINE;
use grocery_core::{Dispatcher, StateStore};

use crate::commands::{self, BrowserStorage};
use crate::components::{BoughtList, CatalogView, QuickAddForm, SearchBar, ToBuyList, Toast, Toolbar};
use crate::context::AppContext;
use crate::store::{self, UiState};

#[component]
pub fn App() -> impl IntoView {
    let config = commands::load_config();
    let ui = reactive_stores::Store::new(UiState::default());
    let ctx = AppContext::new(ui, config.toast_duration_ms);
    provide_context(ctx);

    // Load the catalog once, then open the saved checklist against it
    spawn_local(async move {
        let document = commands::load_catalog(&config.catalog_url).await;
        let state = StateStore::open(BrowserStorage::new(config.storage_key.as_str()))
            .with_notifier(move |notice| ctx.notify(notice));
        ctx.boot(Dispatcher::new(state, document, config));
    });

    view! {
        <div class="app">
            <header class="topbar">
                <h1>"Courses"</h1>
                <p class="meta">{STATUS_LINE}</p>
                <SearchBar />
                <QuickAddForm />
                <Toolbar />
            </header>

            <Show
                when=move || store::store_ready(&ctx.ui)
                fallback=|| view! { <p class="muted loading">"Chargement du catalogue…"</p> }
            >
                <main class="columns">
                    <section class="column">
                        <h2>"À acheter"</h2>
                        <ToBuyList />
                    </section>
                    <section class="column">
                        <h2>"Acheté"</h2>
                        <BoughtList />
                    </section>
                    <section class="column">
                        <h2>"Catalogue"</h2>
                        <CatalogView />
                    </section>
                </main>
            </Show>

            <Toast />
        </div>
    }
}

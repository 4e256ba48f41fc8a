//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use grocery_core::{Action, Dispatcher, Notice};

use crate::commands::BrowserStorage;
use crate::store::{self, UiStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive UI state
    pub ui: UiStore,
    /// Checklist engine, `None` until the catalog is loaded
    engine: StoredValue<Option<Dispatcher<BrowserStorage>>, LocalStorage>,
    /// Pending toast dismissal; replacing it cancels the previous one
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
    toast_ms: u32,
}

impl AppContext {
    pub fn new(ui: UiStore, toast_ms: u32) -> Self {
        Self {
            ui,
            engine: StoredValue::new_local(None),
            toast_timer: StoredValue::new_local(None),
            toast_ms,
        }
    }

    /// Install the engine built at boot and draw the first render
    pub fn boot(&self, mut engine: Dispatcher<BrowserStorage>) {
        store::store_init_catalog(&self.ui, engine.document(), &engine.config().default_category);
        let views = engine.render(&store::store_query_untracked(&self.ui));
        store::store_set_views(&self.ui, views);
        self.engine.set_value(Some(engine));
    }

    /// Apply a user action, then re-render every view
    pub fn dispatch(&self, action: Action) {
        let query = store::store_query_untracked(&self.ui);
        let rendered = self
            .engine
            .try_update_value(|engine| engine.as_mut().map(|e| e.dispatch(action, &query)))
            .flatten();
        match rendered {
            Some(views) => store::store_set_views(&self.ui, views),
            None => log::warn!("Action ignored: checklist not loaded yet"),
        }
    }

    /// Re-render without a state change (search input)
    pub fn rerender(&self) {
        let query = store::store_query_untracked(&self.ui);
        let rendered = self
            .engine
            .try_update_value(|engine| engine.as_mut().map(|e| e.render(&query)))
            .flatten();
        if let Some(views) = rendered {
            store::store_set_views(&self.ui, views);
        }
    }

    /// Show `notice` as a toast; a newer notice restarts the dismiss timer
    pub fn notify(&self, notice: Notice) {
        store::store_set_toast(&self.ui, Some(notice.message().to_string()));
        let ui = self.ui;
        let timeout = Timeout::new(self.toast_ms, move || store::store_set_toast(&ui, None));
        self.toast_timer.set_value(Some(timeout));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

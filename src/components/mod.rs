//! UI Components
//!
//! Reusable Leptos components.

mod bought_list;
mod catalog_view;
mod confirm_button;
mod quick_add_form;
mod search_bar;
mod to_buy_list;
mod toast;
mod toolbar;

pub use bought_list::BoughtList;
pub use catalog_view::CatalogView;
pub use confirm_button::ConfirmButton;
pub use quick_add_form::QuickAddForm;
pub use search_bar::SearchBar;
pub use to_buy_list::ToBuyList;
pub use toast::Toast;
pub use toolbar::Toolbar;

//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod filter_bar;
mod product_grid;
mod search_modal;
mod newsletter_form;
mod loading_screen;
mod toast_stack;

pub use header::Header;
pub use filter_bar::FilterBar;
pub use product_grid::ProductGrid;
pub use search_modal::SearchModal;
pub use newsletter_form::NewsletterForm;
pub use loading_screen::LoadingScreen;
pub use toast_stack::ToastStack;

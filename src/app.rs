//! SneakerHive Frontend App
//!
//! Root component: owns the shop store, runs the one startup product
//! fetch, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    FilterBar, Header, LoadingScreen, NewsletterForm, ProductGrid, SearchModal, ToastStack,
};
use crate::context::{AppContext, Toast, ToastKind};
use crate::store::{store_set_products, ShopState, ShopStore};

#[component]
pub fn App() -> impl IntoView {
    let store: ShopStore = Store::new(ShopState::new());
    provide_context(store);

    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (next_toast_id, set_next_toast_id) = signal(0u32);
    let (search_open, set_search_open) = signal(false);

    let ctx = AppContext::new(
        (toasts, set_toasts),
        (next_toast_id, set_next_toast_id),
        (search_open, set_search_open),
    );
    provide_context(ctx);

    // Load products on mount. On failure the product list is left as it
    // was (empty on first load) and the user sees an error toast.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(products) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} products", products.len()).into(),
                    );
                    store_set_products(&store, products);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Error fetching products: {}", e).into(),
                    );
                    ctx.notify("Failed to load products", ToastKind::Error);
                }
            }
        });
    });

    view! {
        <LoadingScreen />
        <Header />
        <SearchModal />

        <main>
            <section id="home" class="hero">
                <h1>"Step Into Style"</h1>
                <p>"Discover the latest drops from the brands you love"</p>
            </section>

            <section id="products" class="products-section">
                <h2>"Featured Sneakers"</h2>
                <FilterBar />
                <ProductGrid />
            </section>

            <section id="newsletter" class="newsletter-section">
                <h2>"Stay in the Loop"</h2>
                <NewsletterForm />
            </section>
        </main>

        <ToastStack />
    }
}

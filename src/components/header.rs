//! Header Component
//!
//! Sticky site header: logo, nav menu with mobile hamburger, search
//! button, and wishlist/cart counters.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{use_shop_store, ShopStateStoreFields};

/// Attach the window scroll listener that drives the header shadow.
/// Bound once for the page lifetime, never removed.
fn bind_scroll_listener(set_scrolled: WriteSignal<bool>) {
    let Some(win) = web_sys::window() else { return };

    let target = win.clone();
    let cb = Closure::<dyn FnMut()>::new(move || {
        let offset = target.scroll_y().unwrap_or(0.0);
        set_scrolled.set(offset > 0.0);
    });
    let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Smooth-scroll to the section matching `selector`
fn scroll_to_section(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if let Ok(Some(element)) = document.query_selector(selector) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Nav sections (selector, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#products", "Shop"),
    ("#newsletter", "Newsletter"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_shop_store();

    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    bind_scroll_listener(set_scrolled);

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let wishlist_count = move || store.wishlist().read().len();
    let cart_count = move || store.cart().read().len();

    view! {
        <header id="header" class="header" class:scrolled=scrolled>
            <nav class="navbar">
                <a class="logo" href="#home">"SneakerHive"</a>

                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {NAV_LINKS.iter().map(|(selector, label)| {
                        let sel = *selector;
                        view! {
                            <li>
                                <a
                                    href=sel
                                    on:click=move |_| {
                                        scroll_to_section(sel);
                                        set_menu_open.set(false);
                                    }
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <div class="nav-icons">
                    <button
                        id="searchBtn"
                        class="icon-btn"
                        aria-label="Search"
                        on:click=move |_| ctx.open_search()
                    >
                        <i class="fas fa-search"></i>
                    </button>
                    <button class="icon-btn" aria-label="Wishlist">
                        <i class="fas fa-heart"></i>
                        <span id="wishlistCounter" class="counter">{wishlist_count}</span>
                    </button>
                    <button class="icon-btn" aria-label="Cart">
                        <i class="fas fa-shopping-cart"></i>
                        <span id="cartCounter" class="counter">{cart_count}</span>
                    </button>
                    <button
                        id="hamburger"
                        class="hamburger"
                        class:active=menu_open
                        aria-label="Menu"
                        on:click=toggle_menu
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

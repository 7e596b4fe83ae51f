//! Filter Bar Component
//!
//! Brand filter buttons above the product grid.

use leptos::prelude::*;

use crate::catalog::FILTER_BRANDS;
use crate::store::{store_set_filter, use_shop_store, ShopStateStoreFields};

/// Brand filter buttons; exactly one is active at a time
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="filter-bar">
            {FILTER_BRANDS.iter().map(|(value, label)| {
                let val = *value;
                let is_selected = move || *store.active_filter().read() == val;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        data-filter=val
                        on:click=move |_| store_set_filter(&store, val)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

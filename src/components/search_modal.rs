//! Search Modal Component
//!
//! Full-screen search overlay; clicking the backdrop dismisses it.
//! There is no search backend, the input is display-only for now.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.search_open.get()>
            <div id="searchModal" class="modal" on:click=move |_| ctx.close_search()>
                // Clicks inside the dialog must not reach the backdrop
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search for sneakers..."
                    />
                </div>
            </div>
        </Show>
    }
}

//! Loading Screen Component
//!
//! Splash overlay shown at mount and hidden after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the splash stays up after mount
const LOADING_SCREEN_MS: u32 = 1000;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (visible, set_visible) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(LOADING_SCREEN_MS).await;
            set_visible.set(false);
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div id="loadingScreen" class="loading-screen">
                <div class="loading-spinner"></div>
            </div>
        </Show>
    }
}

//! Toast Stack Component
//!
//! Renders the transient notification banners in insertion order.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notifications">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("notification {}", toast.kind.class());
                    // The fade-out class is computed reactively so the
                    // same banner node transitions instead of being
                    // remounted with the class already set
                    let fading = move || {
                        ctx.toasts
                            .with(|toasts| toasts.iter().any(|t| t.id == id && t.fading))
                    };
                    view! {
                        <div class=class class:fade-out=fading>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Newsletter Form Component
//!
//! Footer signup form. Submission is client-side only: there is no
//! subscription endpoint to call.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{AppContext, ToastKind};

/// Submission outcome: the form always clears and the success message
/// always shows. There is no address validation, an empty submit
/// behaves the same as a filled one.
fn complete_subscription(email: &mut String) -> &'static str {
    email.clear();
    "Thank you for subscribing!"
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());

    let subscribe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut address = email.get_untracked();
        let message = complete_subscription(&mut address);
        set_email.set(address);
        ctx.notify(message, ToastKind::Success);
    };

    view! {
        <form id="newsletterForm" class="newsletter-form" on:submit=subscribe>
            <input
                id="newsletterEmail"
                type="email"
                placeholder="Enter your email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />
            <button type="submit">"Subscribe"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_clears_and_thanks_even_when_empty() {
        for address in ["", "sneaker@example.com"] {
            let mut email = address.to_string();
            let message = complete_subscription(&mut email);
            assert_eq!(message, "Thank you for subscribing!");
            assert!(email.is_empty());
        }
    }
}

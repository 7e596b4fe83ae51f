//! Application Context
//!
//! Shared state provided via Leptos Context API: the toast queue and
//! the search modal visibility.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Visible duration before the fade-out class is applied
const TOAST_VISIBLE_MS: u32 = 3000;
/// Fade transition time before the banner is dropped
const TOAST_FADE_MS: u32 = 300;

/// Toast severity, mapped to a CSS class on the banner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A transient notification banner
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    pub fading: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active toasts in insertion order - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: ReadSignal<u32>,
    set_next_toast_id: WriteSignal<u32>,
    /// Whether the search modal is open - read
    pub search_open: ReadSignal<bool>,
    set_search_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        next_toast_id: (ReadSignal<u32>, WriteSignal<u32>),
        search_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_toast_id: next_toast_id.0,
            set_next_toast_id: next_toast_id.1,
            search_open: search_open.0,
            set_search_open: search_open.1,
        }
    }

    /// Show a transient toast. It fades after 3s and is dropped 300ms
    /// later; the timers are fire-and-forget with no cancellation.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_toast_id.get_untracked();
        self.set_next_toast_id.set(id.wrapping_add(1));

        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
                fading: false,
            });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            set_toasts.update(|toasts| fade_toast(toasts, id));
            TimeoutFuture::new(TOAST_FADE_MS).await;
            set_toasts.update(|toasts| remove_toast(toasts, id));
        });
    }

    /// Open the search modal
    pub fn open_search(&self) {
        self.set_search_open.set(true);
    }

    /// Close the search modal
    pub fn close_search(&self) {
        self.set_search_open.set(false);
    }
}

/// Mark a queued toast as fading, in place. Ids and order are stable
/// so the rendered banner node survives and its CSS transition runs.
pub(crate) fn fade_toast(toasts: &mut Vec<Toast>, id: u32) {
    if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
        toast.fading = true;
    }
}

/// Drop a toast from the queue once its fade has finished
pub(crate) fn remove_toast(toasts: &mut Vec<Toast>, id: u32) {
    toasts.retain(|t| t.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_toast(id: u32) -> Toast {
        Toast {
            id,
            message: format!("Toast {}", id),
            kind: ToastKind::Info,
            fading: false,
        }
    }

    #[test]
    fn fade_marks_in_place_without_reordering() {
        let mut toasts = vec![make_toast(1), make_toast(2), make_toast(3)];

        fade_toast(&mut toasts, 2);

        let ids: Vec<u32> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(toasts[1].fading);
        assert!(!toasts[0].fading);
        assert!(!toasts[2].fading);
    }

    #[test]
    fn removal_drops_only_the_finished_toast() {
        let mut toasts = vec![make_toast(1), make_toast(2)];
        fade_toast(&mut toasts, 1);

        remove_toast(&mut toasts, 1);

        let ids: Vec<u32> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn fade_of_unknown_id_is_a_no_op() {
        let mut toasts = vec![make_toast(1)];
        fade_toast(&mut toasts, 99);
        assert!(!toasts[0].fading);
        assert_eq!(toasts.len(), 1);
    }
}

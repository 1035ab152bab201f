//! Transient notifications (toasts).
//!
//! A bounded queue of short-lived messages shown in the corner of the
//! screen. Each toast dismisses itself after [`TOAST_DURATION_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Add a toast, dropping the oldest beyond [`MAX_TOASTS`]. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove a toast. Unknown ids (already expired) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastQueue>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        ToastKind::Success => log::info!("{} {}", kind.emoji(), message),
        ToastKind::Error => log::error!("{} {}", kind.emoji(), message),
    }

    let Some(id) = toasts.try_update(|queue| queue.push(kind, message)) else {
        return;
    };

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|queue| queue.dismiss(id));
    });
}

/// Renders the toast stack. Expects a `RwSignal<ToastQueue>` in context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast-icon">{toast.kind.emoji()}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

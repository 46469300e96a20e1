use std::time::Duration;

use leptos::prelude::*;
use truthlens_core::toast::{Toast, ToastId, ToastQueue};

/// Handle to the notification queue, provided once at the root.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    dismiss_after: Duration,
}

impl Toasts {
    /// Create the queue and provide it as context.
    pub fn provide(limit: usize, dismiss_after_ms: u64) -> Self {
        let toasts = Self {
            queue: RwSignal::new(ToastQueue::new(limit)),
            dismiss_after: Duration::from_millis(dismiss_after_ms),
        };
        provide_context(toasts);
        toasts
    }

    /// Show a toast and schedule its dismissal.
    pub fn show(&self, toast: Toast) {
        let Some(id) = self.queue.try_update(|queue| queue.push(toast)) else {
            return;
        };
        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), self.dismiss_after);
    }

    /// Remove a toast if it is still visible.
    pub fn dismiss(&self, id: ToastId) {
        self.queue.try_update(|queue| queue.dismiss(id));
    }

    fn visible(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.iter().cloned().collect())
    }
}

/// The toaster provided by [`crate::app::App`].
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders visible toasts, newest first.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li class=toast.variant.class() role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                {toast.description.map(|text| view! { <p class="toast-description">{text}</p> })}
                            </div>
                            <button class="toast-close" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

//! Transient notifications.
//!
//! Toasts live in a [`ToastQueue`] signal owned by the page; anything that
//! wants to tell the user something calls [`notify`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::TOAST_DURATION_MS;
use crate::types::{Toast, ToastQueue};

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastQueue>, toast: Toast) {
    log::info!("🔔 {}", toast.title);

    if let Some(id) = toasts.try_update(|queue| queue.push(toast)) {
        Timeout::new(TOAST_DURATION_MS, move || {
            toasts.update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

/// Fixed-position stack of visible toasts.
#[component]
pub fn Toaster(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.css_class() role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title}</div>
                                {toast.description.map(|description| view! {
                                    <div class="toast-description">{description}</div>
                                })}
                            </div>
                            <button
                                class="toast-close"
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

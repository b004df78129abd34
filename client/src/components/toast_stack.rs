//! Toast rendering and the notification sink that feeds it.

use leptos::prelude::*;
use session::{Notice, NotificationSink};

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Pushes session notices into the toast queue. In the browser each toast is
/// dismissed again after [`TOAST_TTL_MS`](crate::state::toast::TOAST_TTL_MS).
#[derive(Clone, Copy)]
pub struct ToastSink(pub RwSignal<ToastState>);

impl NotificationSink for ToastSink {
    fn notify(&self, notice: Notice) {
        let toasts = self.0;
        let id = toasts.try_update(|state| state.push(notice));

        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_TTL_MS))).await;
                toasts.update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
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

//! Toast notification viewport and its auto-dismiss timer.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::state::ui::{ToastKind, UiState};

/// Auto-dismiss toast `id` after the display duration (browser only).
pub fn schedule_dismiss(ui: RwSignal<UiState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::ui::TOAST_DURATION_MS).await;
        ui.update(|s| s.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ui, id);
}

/// Fixed-position host for the active toast.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-viewport" aria-live="polite">
            {move || {
                ui.with(|s| s.toast.clone())
                    .map(|toast| {
                        let id = toast.id;
                        let is_error = toast.kind == ToastKind::Error;
                        view! {
                            <div
                                class="toast"
                                class:toast--error=is_error
                                role="status"
                            >
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| ui.update(|s| s.dismiss_toast(id))
                                    aria-label="Dismiss notification"
                                >
                                    <Icon kind=IconKind::Close size=16/>
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

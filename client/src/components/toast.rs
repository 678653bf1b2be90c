//! Transient success/failure notification.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays visible.
#[cfg(feature = "hydrate")]
const TOAST_VISIBLE_MS: u64 = 3000;

/// Show a toast and schedule it to hide.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(seq) = ui.try_update(|u| u.show_toast(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_VISIBLE_MS)).await;
        ui.update(|u| u.dismiss_toast(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// CSS modifier for a toast variant.
fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Bottom-corner toast host.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                ui.get().toast.map(|toast| {
                    let seq = toast.seq;
                    view! {
                        <div class=toast_class(toast.kind) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| ui.update(|u| u.dismiss_toast(seq))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

//! Yes/no confirmation overlay.

use leptos::prelude::*;

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to remove this report?";

/// Backdrop dialog asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    message: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Events stop here so an enclosing modal does not also handle them.
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            on_cancel.run(());
        }
    };
    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_cancel.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

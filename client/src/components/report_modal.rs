//! Detail overlay for the selected report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visibility follows `UiState::selected_id`. Deleting goes through a
//! confirmation step; the modal closes once the store has answered, whatever
//! the outcome, and failures surface as an error toast.

#[cfg(test)]
#[path = "report_modal_test.rs"]
mod report_modal_test;

use leptos::prelude::*;
use reports::{ReportDetail, StoreError};

use crate::components::confirm_dialog::{ConfirmDialog, DELETE_PROMPT};
use crate::components::toast::notify;
use crate::state::reports::ReportsState;
use crate::state::ui::{ToastKind, UiState};

pub(crate) const DELETED_MESSAGE: &str = "Report deleted successfully.";

/// Toast to show after a delete attempt, if any.
pub(crate) fn delete_feedback(outcome: &Result<bool, StoreError>) -> Option<(ToastKind, String)> {
    match outcome {
        Ok(true) => Some((ToastKind::Success, DELETED_MESSAGE.to_owned())),
        Ok(false) => None,
        Err(_) => Some((
            ToastKind::Error,
            "Could not delete the report. Please try again.".to_owned(),
        )),
    }
}

#[component]
pub fn ReportModal() -> impl IntoView {
    let reports = expect_context::<RwSignal<ReportsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let detail = Memo::new(move |_| {
        let id = ui.with(|u| u.selected_id)?;
        reports.with(|s| s.detail(id))
    });

    let on_close = Callback::new(move |()| ui.update(UiState::close_detail));
    let on_ask_delete = move |_| ui.update(UiState::request_delete);
    let on_cancel_delete = Callback::new(move |()| ui.update(UiState::cancel_delete));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = ui.with_untracked(|u| u.selected_id) else {
            return;
        };
        let Some(outcome) = reports.try_update(|s| s.store.delete(id)) else {
            return;
        };
        if let Err(err) = &outcome {
            log::warn!("delete of report {id} failed: {err}");
        }
        ui.update(UiState::close_detail);
        if let Some((kind, message)) = delete_feedback(&outcome) {
            notify(ui, kind, message);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    move || {
        detail.get().map(|report: ReportDetail| {
            let badge = format!("category-badge {} text-white", report.badge_class);
            let image = report.image.map_or_else(
                || {
                    view! {
                        <div class="report-modal__placeholder">
                            <i class="bi bi-image display-1 text-muted" aria-hidden="true"></i>
                            <p>"No photo attached"</p>
                        </div>
                    }
                    .into_any()
                },
                |src| view! { <img class="report-modal__image" src=src alt="Reported issue"/> }.into_any(),
            );

            view! {
                <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="dialog report-modal"
                        role="dialog"
                        aria-modal="true"
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <div class="report-modal__header">
                            <h4>"Report Details"</h4>
                            <button class="report-modal__close" title="Close" on:click=move |_| on_close.run(())>
                                "✕"
                            </button>
                        </div>
                        <div class="report-modal__body">
                            <div class="report-modal__media">{image}</div>
                            <div class="report-modal__info">
                                <span class=badge>{report.category.label().to_owned()}</span>
                                <h3 class="report-modal__location">{report.location}</h3>
                                <p class="report-modal__description">{report.description}</p>
                                <dl class="report-modal__meta">
                                    <dt>"Reporter"</dt>
                                    <dd>{report.reporter}</dd>
                                    <dt>"Contact"</dt>
                                    <dd>{report.contact}</dd>
                                    <dt>"Submitted"</dt>
                                    <dd>{report.timestamp}</dd>
                                </dl>
                            </div>
                        </div>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                            <button class="btn btn--danger" on:click=on_ask_delete>
                                <i class="bi bi-trash" aria-hidden="true"></i>
                                " Delete Report"
                            </button>
                        </div>
                    </div>
                    <Show when=move || ui.with(|u| u.confirm_delete)>
                        <ConfirmDialog
                            message=DELETE_PROMPT
                            confirm_label="Delete"
                            on_confirm=on_confirm_delete
                            on_cancel=on_cancel_delete
                        />
                    </Show>
                </div>
            }
        })
    }
}

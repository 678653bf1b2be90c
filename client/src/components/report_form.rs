//! Issue submission form with photo preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns its field signals and the in-flight photo payload. On submit
//! it validates the draft, hands it to the store, then resets itself and
//! scrolls the gallery into view.

#[cfg(test)]
#[path = "report_form_test.rs"]
mod report_form_test;

use leptos::prelude::*;
use reports::{Category, ReportDraft, StoreError};

use crate::components::toast::notify;
use crate::state::reports::ReportsState;
use crate::state::ui::{ToastKind, UiState};

pub(crate) const SUBMITTED_MESSAGE: &str = "Report submitted successfully!";

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FormValues {
    pub name: String,
    pub contact: String,
    /// Selected `<option>` value; empty until a category is chosen.
    pub category: String,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
}

impl FormValues {
    /// Build the store draft from raw values.
    pub fn to_draft(&self) -> ReportDraft {
        ReportDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
            category: Category::from_label(&self.category),
            location: self.location.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// Numbers photo reads so only the latest selection may set the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhotoReads {
    latest: u64,
}

impl PhotoReads {
    /// Start a read; returns its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Drop every outstanding read (new empty selection, form reset).
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// User-facing text for a failed submission.
pub(crate) fn submit_error_message(err: &StoreError) -> String {
    match err {
        StoreError::InvalidDraft(e) => e.to_string(),
        StoreError::Storage(_) | StoreError::Serialize(_) => {
            "Could not save the report on this device. Free some browser storage and try again.".to_owned()
        }
    }
}

#[component]
pub fn ReportForm() -> impl IntoView {
    let reports = expect_context::<RwSignal<ReportsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let values = RwSignal::new(FormValues::default());
    let form_error = RwSignal::new(None::<String>);
    let photo_reads = RwSignal::new(PhotoReads::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                photo_reads.update(PhotoReads::invalidate);
                values.update(|v| v.image = None);
                return;
            };
            let Some(ticket) = photo_reads.try_update(PhotoReads::begin) else {
                return;
            };
            crate::util::file_reader::read_as_data_url(&file, move |data_url| {
                if photo_reads.with_untracked(|reads| reads.is_current(ticket)) {
                    values.update(|v| v.image = Some(data_url));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = values.with_untracked(FormValues::to_draft);
        let Some(outcome) = reports.try_update(|s| s.store.create(&draft)) else {
            return;
        };

        match outcome {
            Ok(_) => {
                photo_reads.update(PhotoReads::invalidate);
                values.set(FormValues::default());
                form_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    if let Some(window) = web_sys::window()
                        && window.location().set_hash("reports").is_err()
                    {
                        log::warn!("could not scroll to the reports gallery");
                    }
                }
                notify(ui, ToastKind::Success, SUBMITTED_MESSAGE);
            }
            Err(err @ StoreError::InvalidDraft(_)) => form_error.set(Some(submit_error_message(&err))),
            Err(err) => {
                log::warn!("report submission failed: {err}");
                notify(ui, ToastKind::Error, submit_error_message(&err));
            }
        }
    };

    view! {
        <form class="report-form" on:submit=on_submit>
            <div class="report-form__row">
                <label class="report-form__label">
                    "Your Name"
                    <input
                        class="report-form__input"
                        type="text"
                        required=true
                        prop:value=move || values.with(|v| v.name.clone())
                        on:input=move |ev| values.update(|v| v.name = event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Contact Info"
                    <input
                        class="report-form__input"
                        type="text"
                        required=true
                        placeholder="Phone or email"
                        prop:value=move || values.with(|v| v.contact.clone())
                        on:input=move |ev| values.update(|v| v.contact = event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="report-form__row">
                <label class="report-form__label">
                    "Category"
                    <select
                        class="report-form__input"
                        required=true
                        prop:value=move || values.with(|v| v.category.clone())
                        on:change=move |ev| values.update(|v| v.category = event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Select a category"</option>
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="report-form__label">
                    "Location"
                    <input
                        class="report-form__input"
                        type="text"
                        required=true
                        placeholder="Street, area, or landmark"
                        prop:value=move || values.with(|v| v.location.clone())
                        on:input=move |ev| values.update(|v| v.location = event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="report-form__label">
                "Description"
                <textarea
                    class="report-form__input report-form__textarea"
                    required=true
                    rows="4"
                    prop:value=move || values.with(|v| v.description.clone())
                    on:input=move |ev| values.update(|v| v.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="report-form__label">
                "Photo (optional)"
                <input
                    class="report-form__input"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </label>
            <Show when=move || values.with(|v| v.image.is_some())>
                <img
                    class="report-form__preview"
                    alt="Selected photo preview"
                    src=move || values.with(|v| v.image.clone().unwrap_or_default())
                />
            </Show>
            <Show when=move || form_error.get().is_some()>
                <p class="report-form__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary report-form__submit" type="submit">
                "Submit Report"
            </button>
        </form>
    }
}

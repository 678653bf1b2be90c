//! Filtered report grid with an empty state.

#[cfg(test)]
#[path = "report_gallery_test.rs"]
mod report_gallery_test;

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::state::reports::ReportsState;
use crate::state::ui::UiState;

/// Text for the empty gallery panel.
fn empty_message(restored: bool, collection_empty: bool) -> &'static str {
    match (restored, collection_empty) {
        (false, _) => "Loading reports...",
        (true, true) => "No reports yet. Be the first to report an issue.",
        (true, false) => "No reports in this category.",
    }
}

#[component]
pub fn ReportGallery() -> impl IntoView {
    let reports = expect_context::<RwSignal<ReportsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let cards = Memo::new(move |_| {
        let filter = ui.with(|u| u.filter);
        reports.with(|s| s.summaries(filter))
    });
    let on_open = Callback::new(move |id: u64| ui.update(|u| u.open_detail(id)));

    view! {
        <Show
            when=move || !cards.with(Vec::is_empty)
            fallback=move || {
                view! {
                    <div class="empty-state">
                        <i class="bi bi-inbox display-4" aria-hidden="true"></i>
                        <p>
                            {move || reports.with(|s| empty_message(s.restored, s.store.is_empty()))}
                        </p>
                    </div>
                }
            }
        >
            <div class="reports-grid">
                <For
                    each=move || cards.get()
                    key=|card| card.id
                    children=move |card| view! { <ReportCard summary=card on_open=on_open/> }
                />
            </div>
        </Show>
    }
}

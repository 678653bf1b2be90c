//! Dashboard counters: total reports, reports with photos, top category.

use leptos::prelude::*;

use crate::state::reports::ReportsState;

#[component]
pub fn StatsBar() -> impl IntoView {
    let reports = expect_context::<RwSignal<ReportsState>>();
    let stats = Memo::new(move |_| reports.with(|s| s.stats()));

    view! {
        <section class="stats-bar">
            <div class="stat">
                <span class="stat__value">{move || stats.get().total}</span>
                <span class="stat__label">"Total Reports"</span>
            </div>
            <div class="stat">
                <span class="stat__value">{move || stats.get().with_images}</span>
                <span class="stat__label">"With Photos"</span>
            </div>
            <div class="stat">
                <span class="stat__value">{move || stats.with(|s| s.top_label().to_owned())}</span>
                <span class="stat__label">"Top Category"</span>
            </div>
        </section>
    }
}

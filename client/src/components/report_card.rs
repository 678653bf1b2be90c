//! Gallery card for one report summary.
//!
//! DESIGN
//! ======
//! Cards only render `ReportSummary` data; opening the detail view is
//! delegated to the parent through `on_open`.

use leptos::prelude::*;
use reports::ReportSummary;

/// A clickable card showing thumbnail, badge, location, excerpt, and byline.
#[component]
pub fn ReportCard(summary: ReportSummary, on_open: Callback<u64>) -> impl IntoView {
    let id = summary.id;
    let badge = format!("category-badge {} text-white", summary.badge_class);
    let thumbnail = summary.thumbnail.map_or_else(
        || view! { <i class="bi bi-image text-muted display-4" aria-hidden="true"></i> }.into_any(),
        |src| view! { <img src=src alt="Issue"/> }.into_any(),
    );

    view! {
        <article
            class="report-item"
            role="button"
            tabindex="0"
            on:click=move |_| on_open.run(id)
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_open.run(id);
                }
            }
        >
            <div class="thumbnail-container">{thumbnail}</div>
            <div class="report-item__body">
                <span class=badge>{summary.category.label().to_owned()}</span>
                <h5 class="report-item__location">{summary.location}</h5>
                <p class="report-item__excerpt">{summary.excerpt}</p>
                <div class="report-item__meta">
                    <small>{summary.reporter}</small>
                    <small>{summary.date}</small>
                </div>
            </div>
        </article>
    }
}

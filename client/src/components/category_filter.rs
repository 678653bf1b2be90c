//! Category chips that narrow the gallery.

#[cfg(test)]
#[path = "category_filter_test.rs"]
mod category_filter_test;

use leptos::prelude::*;
use reports::Category;

use crate::state::ui::UiState;

/// Chip label for a filter choice.
fn filter_label(filter: Option<Category>) -> &'static str {
    filter.map_or("All", Category::label)
}

/// Every filter choice, "All" first.
fn filter_choices() -> impl Iterator<Item = Option<Category>> {
    std::iter::once(None).chain(Category::ALL.into_iter().map(Some))
}

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="category-filter" aria-label="Filter reports by category">
            {filter_choices()
                .map(|choice| {
                    view! {
                        <button
                            class="category-filter__chip"
                            class:category-filter__chip--active=move || ui.get().filter == choice
                            on:click=move |_| ui.update(|u| u.filter = choice)
                        >
                            {filter_label(choice)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

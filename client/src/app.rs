//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{reports::ReportsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the report store and UI state contexts. The store is restored
/// from `localStorage` once the app is mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let reports: RwSignal<ReportsState> = RwSignal::new(ReportsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(reports);
    provide_context(ui);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        reports.update(|state| state.restore());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/civic-reports.css"/>
        <Title text="Jamshoro Civic Reports"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

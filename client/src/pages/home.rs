//! Single-page layout: submission form, counters, and the filtered gallery.

use leptos::prelude::*;

use crate::components::category_filter::CategoryFilter;
use crate::components::report_form::ReportForm;
use crate::components::report_gallery::ReportGallery;
use crate::components::report_modal::ReportModal;
use crate::components::stats_bar::StatsBar;
use crate::components::toast::ToastHost;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="hero">
                <h1 class="hero__title">"Jamshoro Civic Reports"</h1>
                <p class="hero__subtitle">
                    "Report water, electricity, road, gas, and internet problems in your neighbourhood."
                </p>
                <a class="btn btn--primary" href="#report-form">"Report an Issue"</a>
            </header>

            <main class="home-page__content">
                <section id="report-form" class="panel">
                    <h2 class="panel__title">"Submit a Report"</h2>
                    <ReportForm/>
                </section>

                <StatsBar/>

                <section id="reports" class="panel">
                    <h2 class="panel__title">"Recent Reports"</h2>
                    <CategoryFilter/>
                    <ReportGallery/>
                </section>
            </main>

            <footer class="home-page__footer">
                <small>"Reports are stored in this browser only."</small>
            </footer>

            <ReportModal/>
            <ToastHost/>
        </div>
    }
}

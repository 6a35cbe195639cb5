//! Administrator dashboard with portal-wide counts.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::routes;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary = LocalResource::new(|| crate::services::admin::dashboard());

    view! {
        <div class="admin-dashboard">
            <PageHeader title="Administration"/>

            <nav class="admin-dashboard__nav">
                <a class="btn" href=routes::ADMIN_AREAS>
                    "Manage areas"
                </a>
            </nav>

            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(summary) => {
                                view! {
                                    <div class="admin-dashboard__body">
                                    <div class="stat-grid">
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{summary.total_companies}</span>
                                            <span class="stat-tile__label">"Companies"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{summary.total_students}</span>
                                            <span class="stat-tile__label">"Students"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{summary.open_offers}</span>
                                            <span class="stat-tile__label">"Open offers"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{summary.closed_offers}</span>
                                            <span class="stat-tile__label">"Closed offers"</span>
                                        </div>
                                    </div>
                                    <section class="admin-dashboard__by-area">
                                        <h2>"Open offers by area"</h2>
                                        <ul>
                                            {summary
                                                .offers_by_area
                                                .into_iter()
                                                .map(|(area, count)| {
                                                    view! { <li>{area} ": " {count}</li> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </section>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(error) => {
                                view! { <p class="error-banner">{error.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

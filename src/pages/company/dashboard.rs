//! Company dashboard: published offers and incoming applications.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::ApplicationStatus;
use crate::routes;
use crate::state::auth::AuthState;

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let company_id =
        auth.get_untracked().session.map_or(0, |session| session.user.id);

    let offers =
        LocalResource::new(move || crate::services::job_offers::list_by_company(company_id));
    let applications =
        LocalResource::new(move || crate::services::applications::list_by_company(company_id));
    let info = RwSignal::new(String::new());

    let on_close_offer = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::job_offers::close(id).await {
                Ok(_) => offers.refetch(),
                Err(error) => info.set(format!("Could not close offer: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_set_status = move |id: i64, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::applications::set_status(id, status).await {
                Ok(_) => applications.refetch(),
                Err(error) => info.set(format!("Could not update application: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    view! {
        <div class="company-dashboard">
            <PageHeader title="Your offers"/>

            <nav class="company-dashboard__nav">
                <a class="btn btn--primary" href=routes::COMPANY_NEW_OFFER>
                    "+ New offer"
                </a>
            </nav>

            <Show when=move || !info.get().is_empty()>
                <p class="error-banner">{move || info.get()}</p>
            </Show>

            <section class="company-dashboard__offers">
                <h2>"Published offers"</h2>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        offers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"You have not published any offers yet."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="company-dashboard__offer-list">
                                            {list
                                                .into_iter()
                                                .map(|offer| {
                                                    let id = offer.id;
                                                    view! {
                                                        <li class="company-dashboard__offer">
                                                            <span class="company-dashboard__offer-title">
                                                                {offer.title}
                                                            </span>
                                                            <span class="company-dashboard__offer-meta">
                                                                {offer.area.name} " · " {offer.work_mode.label()}
                                                            </span>
                                                            <Show when=move || offer.active>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_close_offer(id)
                                                                >
                                                                    "Close"
                                                                </button>
                                                            </Show>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
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
            </section>

            <section class="company-dashboard__applications">
                <h2>"Applications"</h2>
                <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                    {move || {
                        applications
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No applications yet."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="company-dashboard__application-list">
                                            {list
                                                .into_iter()
                                                .map(|application| {
                                                    let id = application.id;
                                                    view! {
                                                        <li class="company-dashboard__application">
                                                            <span>
                                                                {application.student.name} " → "
                                                                {application.job_offer.title}
                                                            </span>
                                                            <span class="company-dashboard__status">
                                                                {application.status.label()}
                                                            </span>
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    on_set_status(id, ApplicationStatus::InReview)
                                                                }
                                                            >
                                                                "Review"
                                                            </button>
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click=move |_| {
                                                                    on_set_status(id, ApplicationStatus::Approved)
                                                                }
                                                            >
                                                                "Approve"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| {
                                                                    on_set_status(id, ApplicationStatus::Rejected)
                                                                }
                                                            >
                                                                "Reject"
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
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
            </section>
        </div>
    }
}

//! Student dashboard: matching offers and the application list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::offer_card::OfferCard;
use crate::components::page_header::PageHeader;
use crate::net::types::Application;
use crate::routes;
use crate::state::auth::AuthState;

/// Offer ids the student already applied to, for disabling the apply
/// action in the feed.
fn applied_offer_ids(applications: &[Application]) -> Vec<i64> {
    applications.iter().map(|application| application.job_offer.id).collect()
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let student_id =
        auth.get_untracked().session.map_or(0, |session| session.user.id);

    // Offers follow the student's first interest area when one is set,
    // otherwise the open feed.
    let offers = LocalResource::new(move || async move {
        let student = crate::services::students::get(student_id).await?;
        match student.interest_areas.first() {
            Some(area) => crate::services::job_offers::list_by_area(area.id).await,
            None => crate::services::job_offers::list_active().await,
        }
    });
    let applications =
        LocalResource::new(move || crate::services::applications::list_by_student(student_id));
    let info = RwSignal::new(String::new());

    let on_apply = Callback::new(move |job_offer_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::applications::apply(student_id, job_offer_id).await {
                Ok(_) => applications.refetch(),
                Err(error) => info.set(format!("Could not apply: {error}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_offer_id;
        }
    });

    view! {
        <div class="student-dashboard">
            <PageHeader title="Offers for you"/>

            <nav class="student-dashboard__nav">
                <a class="btn" href=routes::STUDENT_PROFILE>
                    "Edit profile"
                </a>
            </nav>

            <Show when=move || !info.get().is_empty()>
                <p class="error-banner">{move || info.get()}</p>
            </Show>

            <section class="student-dashboard__offers">
                <h2>"Open offers"</h2>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        let applied = applications
                            .get()
                            .and_then(Result::ok)
                            .map(|list| applied_offer_ids(&list))
                            .unwrap_or_default();
                        offers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No offers in your area right now."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="offer-list">
                                            {list
                                                .into_iter()
                                                .map(|offer| {
                                                    let already_applied = applied.contains(&offer.id);
                                                    view! {
                                                        <OfferCard
                                                            offer=offer
                                                            applied=already_applied
                                                            on_apply=on_apply
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
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
            </section>

            <section class="student-dashboard__applications">
                <h2>"Your applications"</h2>
                <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                    {move || {
                        applications
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"You have not applied to anything yet."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="student-dashboard__application-list">
                                            {list
                                                .into_iter()
                                                .map(|application| {
                                                    view! {
                                                        <li class="student-dashboard__application">
                                                            <span>{application.job_offer.title}</span>
                                                            <span class="student-dashboard__status">
                                                                {application.status.label()}
                                                            </span>
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

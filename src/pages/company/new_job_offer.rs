//! Job-offer creation form.

#[cfg(test)]
#[path = "new_job_offer_test.rs"]
mod new_job_offer_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::types::{EntityRef, JobOfferDraft, WorkMode};
use crate::routes;
use crate::state::auth::AuthState;
use crate::util::forms::all_filled;

/// Weekly workload accepted for an internship offer.
const HOURS_RANGE: std::ops::RangeInclusive<u32> = 10..=44;

fn parse_weekly_hours(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(hours) if HOURS_RANGE.contains(&hours) => Ok(hours),
        _ => Err("Weekly hours must be between 10 and 44."),
    }
}

/// Select values map straight onto wire work modes; anything else falls
/// back to on-site.
fn parse_work_mode(raw: &str) -> WorkMode {
    match raw {
        "REMOTE" => WorkMode::Remote,
        "HYBRID" => WorkMode::Hybrid,
        _ => WorkMode::OnSite,
    }
}

#[allow(clippy::too_many_arguments)]
fn build_draft(
    company_id: i64,
    title: &str,
    description: &str,
    location: &str,
    requirements: &str,
    work_mode: &str,
    hours: &str,
    area: &str,
) -> Result<JobOfferDraft, &'static str> {
    if !all_filled(&[title, description, location, requirements]) {
        return Err("Fill in every field.");
    }
    let weekly_hours = parse_weekly_hours(hours)?;
    let area_id = area.trim().parse::<i64>().map_err(|_| "Pick an area for the offer.")?;

    Ok(JobOfferDraft {
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        location: location.trim().to_owned(),
        work_mode: parse_work_mode(work_mode),
        weekly_hours,
        requirements: requirements.trim().to_owned(),
        company: EntityRef { id: company_id },
        area: EntityRef { id: area_id },
    })
}

#[component]
pub fn NewJobOfferPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let company_id =
        auth.get_untracked().session.map_or(0, |session| session.user.id);

    let navigate = use_navigate();
    let areas = LocalResource::new(|| crate::services::areas::list());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let work_mode = RwSignal::new("ON_SITE".to_owned());
    let hours = RwSignal::new(String::new());
    let area = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match build_draft(
            company_id,
            &title.get(),
            &description.get(),
            &location.get(),
            &requirements.get(),
            &work_mode.get(),
            &hours.get(),
            &area.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::services::job_offers::create(&draft).await {
                    Ok(_) => navigate(routes::COMPANY_HOME, NavigateOptions::default()),
                    Err(error) => {
                        info.set(format!("Could not publish the offer: {error}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&draft, &navigate);
        }
    };

    view! {
        <div class="new-offer-page">
            <PageHeader title="New offer"/>

            <nav class="new-offer-page__nav">
                <a class="btn" href=routes::COMPANY_HOME>
                    "Back to dashboard"
                </a>
            </nav>

            <form class="new-offer-form" on:submit=on_submit>
                <input
                    class="new-offer-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="new-offer-input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="new-offer-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <textarea
                    class="new-offer-input"
                    placeholder="Requirements"
                    prop:value=move || requirements.get()
                    on:input=move |ev| requirements.set(event_target_value(&ev))
                ></textarea>
                <select
                    class="new-offer-input"
                    prop:value=move || work_mode.get()
                    on:change=move |ev| work_mode.set(event_target_value(&ev))
                >
                    <option value="ON_SITE">"On-site"</option>
                    <option value="REMOTE">"Remote"</option>
                    <option value="HYBRID">"Hybrid"</option>
                </select>
                <input
                    class="new-offer-input"
                    type="number"
                    min="10"
                    max="44"
                    placeholder="Weekly hours"
                    prop:value=move || hours.get()
                    on:input=move |ev| hours.set(event_target_value(&ev))
                />
                <Suspense fallback=move || view! { <p>"Loading areas..."</p> }>
                    {move || {
                        areas
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <select
                                            class="new-offer-input"
                                            prop:value=move || area.get()
                                            on:change=move |ev| area.set(event_target_value(&ev))
                                        >
                                            <option value="">"Pick an area"</option>
                                            {list
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <option value=entry.id.to_string()>{entry.name}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
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

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Publish offer"
                </button>
            </form>

            <Show when=move || !info.get().is_empty()>
                <p class="error-banner">{move || info.get()}</p>
            </Show>
        </div>
    }
}

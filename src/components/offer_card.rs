//! Card component for job-offer listings.

use leptos::prelude::*;

use crate::net::types::JobOffer;

/// A job offer in a dashboard list, with an optional apply action.
#[component]
pub fn OfferCard(
    offer: JobOffer,
    /// Whether the current student already applied to this offer.
    #[prop(optional)]
    applied: bool,
    #[prop(optional, into)]
    on_apply: Option<Callback<i64>>,
) -> impl IntoView {
    let offer_id = offer.id;
    let meta = format!(
        "{} · {} · {} · {}h/week",
        offer.company.name,
        offer.area.name,
        offer.work_mode.label(),
        offer.weekly_hours
    );

    view! {
        <div class="offer-card">
            <h3 class="offer-card__title">{offer.title}</h3>
            <p class="offer-card__meta">{meta}</p>
            <p class="offer-card__location">{offer.location}</p>
            <p class="offer-card__description">{offer.description}</p>
            {on_apply
                .map(|on_apply| {
                    view! {
                        <button
                            class="btn btn--primary"
                            disabled=applied
                            on:click=move |_| on_apply.run(offer_id)
                        >
                            {if applied { "Applied" } else { "Apply" }}
                        </button>
                    }
                })}
        </div>
    }
}

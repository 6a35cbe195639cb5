//! Public landing page with the open-offer feed.

use leptos::prelude::*;

use crate::components::offer_card::OfferCard;
use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    let offers = LocalResource::new(|| crate::services::job_offers::list_active());

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Placement Portal"</h1>
                <p>"Internships and trainee positions, straight from the companies."</p>
                <nav class="home-page__links">
                    <a class="btn btn--primary" href=routes::LOGIN>
                        "Sign In"
                    </a>
                    <a class="btn" href=routes::REGISTER_STUDENT>
                        "I'm a student"
                    </a>
                    <a class="btn" href=routes::REGISTER_COMPANY>
                        "I'm a company"
                    </a>
                </nav>
            </header>

            <section class="home-page__offers">
                <h2>"Open offers"</h2>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        offers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p>"No open offers right now."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="offer-list">
                                            {list
                                                .into_iter()
                                                .map(|offer| view! { <OfferCard offer=offer/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(error) => {
                                    view! {
                                        <p class="error-banner">{error.to_string()}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

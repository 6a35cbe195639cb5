//! Company self-registration form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{CompanyRegistration, EntityRef};
use crate::routes;
use crate::util::forms::{all_filled, toggle_selection};

#[allow(clippy::too_many_arguments)]
fn build_registration(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    tax_id: &str,
    address: &str,
    business_areas: &[i64],
) -> Result<CompanyRegistration, &'static str> {
    if !all_filled(&[name, email, phone, password, tax_id, address]) {
        return Err("Fill in every field.");
    }
    Ok(CompanyRegistration {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        phone: phone.trim().to_owned(),
        password: password.trim().to_owned(),
        tax_id: tax_id.trim().to_owned(),
        address: address.trim().to_owned(),
        business_areas: business_areas.iter().map(|id| EntityRef { id: *id }).collect(),
    })
}

#[component]
pub fn RegisterCompanyPage() -> impl IntoView {
    let navigate = use_navigate();
    let areas = LocalResource::new(|| crate::services::areas::list());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let tax_id = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let selected_areas = RwSignal::new(Vec::<i64>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match build_registration(
            &name.get(),
            &email.get(),
            &phone.get(),
            &password.get(),
            &tax_id.get(),
            &address.get(),
            &selected_areas.get(),
        ) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::services::companies::register(&registration).await {
                    Ok(_) => navigate(routes::LOGIN, NavigateOptions::default()),
                    Err(error) => {
                        info.set(format!("Registration failed: {error}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&registration, &navigate);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Company registration"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Company name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="contact@company.example"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="tel"
                        placeholder="Phone"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Registration number"
                        prop:value=move || tax_id.get()
                        on:input=move |ev| tax_id.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Address"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />

                    <fieldset class="register-areas">
                        <legend>"Business areas"</legend>
                        <Suspense fallback=move || view! { <p>"Loading areas..."</p> }>
                            {move || {
                                areas
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) => {
                                            view! {
                                                <div class="checkbox-group">
                                                    {list
                                                        .into_iter()
                                                        .map(|area| {
                                                            let id = area.id;
                                                            view! {
                                                                <label class="checkbox">
                                                                    <input
                                                                        type="checkbox"
                                                                        prop:checked=move || {
                                                                            selected_areas.get().contains(&id)
                                                                        }
                                                                        on:change=move |_| {
                                                                            selected_areas
                                                                                .update(|selected| toggle_selection(selected, id))
                                                                        }
                                                                    />
                                                                    {area.name}
                                                                </label>
                                                            }
                                                        })
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
                    </fieldset>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <a class="register-link" href=routes::LOGIN>
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}

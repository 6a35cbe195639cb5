//! Student self-registration form.

#[cfg(test)]
#[path = "register_student_test.rs"]
mod register_student_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{EntityRef, StudentRegistration};
use crate::routes;
use crate::util::forms::{all_filled, toggle_selection};

#[allow(clippy::too_many_arguments)]
fn build_registration(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    national_id: &str,
    course: &str,
    interest_areas: &[i64],
) -> Result<StudentRegistration, &'static str> {
    if !all_filled(&[name, email, phone, password, national_id, course]) {
        return Err("Fill in every field.");
    }
    Ok(StudentRegistration {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        phone: phone.trim().to_owned(),
        password: password.trim().to_owned(),
        national_id: national_id.trim().to_owned(),
        course: course.trim().to_owned(),
        interest_areas: interest_areas.iter().map(|id| EntityRef { id: *id }).collect(),
    })
}

#[component]
pub fn RegisterStudentPage() -> impl IntoView {
    let navigate = use_navigate();
    let areas = LocalResource::new(|| crate::services::areas::list());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let course = RwSignal::new(String::new());
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
            &national_id.get(),
            &course.get(),
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
                match crate::services::students::register(&registration).await {
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
                <h1>"Student registration"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
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
                        placeholder="National ID"
                        prop:value=move || national_id.get()
                        on:input=move |ev| national_id.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Course"
                        prop:value=move || course.get()
                        on:input=move |ev| course.set(event_target_value(&ev))
                    />

                    <fieldset class="register-areas">
                        <legend>"Areas of interest"</legend>
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

//! Student profile editor.
//!
//! Loads the full profile once, lets the student edit the contact and
//! presentation fields in place, and writes the whole record back.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::Student;
use crate::routes;
use crate::state::auth::AuthState;

#[component]
pub fn StudentProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let student_id =
        auth.get_untracked().session.map_or(0, |session| session.user.id);

    let loaded = LocalResource::new(move || crate::services::students::get(student_id));
    let student = RwSignal::new(None::<Student>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the edit buffer once the profile arrives.
    Effect::new(move || {
        if let Some(Ok(profile)) = loaded.get() {
            if student.get_untracked().is_none() {
                student.set(Some(profile));
            }
        }
    });

    let field = move |get: fn(&Student) -> String| {
        move || student.get().as_ref().map(get).unwrap_or_default()
    };
    let optional_field = move |get: fn(&Student) -> Option<String>| {
        move || student.get().as_ref().and_then(get).unwrap_or_default()
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(edited) = student.get_untracked() else {
            return;
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::students::update(&edited).await {
                Ok(saved) => {
                    student.set(Some(saved));
                    info.set("Profile saved.".to_owned());
                }
                Err(error) => info.set(format!("Could not save profile: {error}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = edited;
        }
    };

    view! {
        <div class="profile-page">
            <PageHeader title="Your profile"/>

            <nav class="profile-page__nav">
                <a class="btn" href=routes::STUDENT_HOME>
                    "Back to offers"
                </a>
            </nav>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    loaded
                        .get()
                        .map(|result| match result {
                            Ok(_) => {
                                view! {
                                    <form class="profile-form" on:submit=on_save>
                                        <label>
                                            "Phone"
                                            <input
                                                class="profile-input"
                                                type="tel"
                                                prop:value=field(|profile| profile.phone.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.phone = event_target_value(&ev);
                                                            }
                                                        })
                                                }
                                            />
                                        </label>
                                        <label>
                                            "Course"
                                            <input
                                                class="profile-input"
                                                type="text"
                                                prop:value=field(|profile| profile.course.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.course = event_target_value(&ev);
                                                            }
                                                        })
                                                }
                                            />
                                        </label>
                                        <label>
                                            "LinkedIn"
                                            <input
                                                class="profile-input"
                                                type="url"
                                                prop:value=optional_field(|profile| profile.linkedin.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.linkedin = non_empty(event_target_value(&ev));
                                                            }
                                                        })
                                                }
                                            />
                                        </label>
                                        <label>
                                            "GitHub"
                                            <input
                                                class="profile-input"
                                                type="url"
                                                prop:value=optional_field(|profile| profile.github.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.github = non_empty(event_target_value(&ev));
                                                            }
                                                        })
                                                }
                                            />
                                        </label>
                                        <label>
                                            "Portfolio"
                                            <input
                                                class="profile-input"
                                                type="url"
                                                prop:value=optional_field(|profile| profile.portfolio.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.portfolio = non_empty(event_target_value(&ev));
                                                            }
                                                        })
                                                }
                                            />
                                        </label>
                                        <label>
                                            "Summary"
                                            <textarea
                                                class="profile-input"
                                                prop:value=optional_field(|profile| profile.summary.clone())
                                                on:input=move |ev| {
                                                    student
                                                        .update(|profile| {
                                                            if let Some(profile) = profile {
                                                                profile.summary = non_empty(event_target_value(&ev));
                                                            }
                                                        })
                                                }
                                            ></textarea>
                                        </label>
                                        <button
                                            class="btn btn--primary"
                                            type="submit"
                                            disabled=move || busy.get()
                                        >
                                            "Save profile"
                                        </button>
                                    </form>
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

            <Show when=move || !info.get().is_empty()>
                <p class="profile-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

/// Optional links store as absent rather than as empty strings.
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

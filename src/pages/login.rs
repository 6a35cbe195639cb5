//! Login page: email + password against the portal's auth endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Role;
use crate::routes;
use crate::state::auth::AuthState;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Landing route after a successful login, chosen by the declared role.
#[cfg(any(test, feature = "hydrate"))]
fn post_login_route(role: &str) -> &'static str {
    routes::role_home(Role::parse(role))
}

/// The invalid-credentials message covers every rejection the server can
/// express; only transport loss reads differently.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network => error.to_string(),
        _ => "Invalid email or password. Please try again.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        auth.update(|state| state.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::session::auth::login(&credentials).await {
                Ok(response) => {
                    auth.set(AuthState::from_store());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(post_login_route(&response.role));
                    }
                }
                Err(error) => {
                    info.set(login_error_message(&error));
                    auth.update(|state| state.loading = false);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Placement Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"New here?"</p>
                <a class="login-link" href=routes::REGISTER_STUDENT>
                    "Create a student account"
                </a>
                <a class="login-link" href=routes::REGISTER_COMPANY>
                    "Create a company account"
                </a>
            </div>
        </div>
    }
}

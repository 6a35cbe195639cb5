//! Shared header for authenticated pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Header bar with the signed-in identity and a sign-out action.
#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_name =
        move || auth.get().session.map(|session| session.user.name).unwrap_or_default();

    let on_logout = move |_| {
        crate::session::auth::logout();
        auth.set(AuthState::default());
    };

    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <div class="page-header__session">
                <span class="page-header__user">{user_name}</span>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

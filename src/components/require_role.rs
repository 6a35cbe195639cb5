//! Route wrapper enforcing role-based access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route subtree applies the same decision: visitors
//! without a session go to the login page, authenticated visitors outside
//! the allow-list go to their own home route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::routes::guard::{self, RouteDecision};

/// Gate the nested routes behind `allowed_roles`.
///
/// The decision itself is synchronous and pure; the redirect is applied as
/// a navigation effect after render, and nested content only renders on
/// an allow.
#[component]
pub fn RequireRole(
    /// Roles that may enter; omitting it admits any authenticated session.
    #[prop(optional)]
    allowed_roles: Option<Vec<Role>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let decision = guard::decide_current(allowed_roles.as_deref());

    Effect::new(move || {
        if let RouteDecision::Redirect(path) = decision {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision == RouteDecision::Allow>
            <Outlet/>
        </Show>
    }
}

//! Role-gated navigation decision.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the persisted session and the
//! caller-supplied allow-list: no network, no suspension, no side effects.
//! Evaluating it twice against unchanged inputs yields the same outcome.
//! Rendering-side redirects are applied by `components::require_role`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Role, StoredUser};
use crate::routes;
use crate::session::store;

/// Outcome of evaluating a protected navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the nested content.
    Allow,
    /// Send the visitor to the given path instead.
    Redirect(&'static str),
}

/// Decide whether a session may enter a route restricted to
/// `allowed_roles` (`None` admits any authenticated visitor).
///
/// A missing token or missing profile blob always redirects to login; an
/// authenticated visitor outside the allow-list is sent to their own home
/// route rather than shown an error.
pub fn decide(
    token: Option<&str>,
    user: Option<&StoredUser>,
    allowed_roles: Option<&[Role]>,
) -> RouteDecision {
    let user = match (token, user) {
        (Some(_), Some(user)) => user,
        _ => return RouteDecision::Redirect(routes::LOGIN),
    };

    let Some(allowed) = allowed_roles else {
        return RouteDecision::Allow;
    };

    match user.role() {
        Some(role) if allowed.contains(&role) => RouteDecision::Allow,
        role => RouteDecision::Redirect(routes::role_home(role)),
    }
}

/// Evaluate [`decide`] against the live session store.
pub fn decide_current(allowed_roles: Option<&[Role]>) -> RouteDecision {
    let token = store::token();
    let user = store::stored_user();
    decide(token.as_deref(), user.as_ref(), allowed_roles)
}

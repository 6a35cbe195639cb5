//! Login/logout orchestration over the session store.
//!
//! The manager is the only writer of the persisted session: a successful
//! login stores token and profile as a pair, logout drops both. A failed
//! login leaves the store exactly as it was, so callers observe login as
//! atomic.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{AuthResponse, Credentials, Role, StoredUser};
use crate::session::store;

/// A reconstructed view of the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: StoredUser,
}

impl AuthSession {
    /// The session's parsed role, if the stored value is recognized.
    pub fn role(&self) -> Option<Role> {
        self.user.role()
    }
}

/// Authenticate against the portal and persist the resulting session.
///
/// The response is split into the token and the remaining profile fields
/// and both are stored as a pair.
///
/// # Errors
///
/// Propagates the classified [`ApiError`]; nothing is written on failure.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = http::post("/auth/login", credentials).await?;
    persist(&response);
    log::info!("login succeeded for user {}", response.id);
    Ok(response)
}

fn persist(response: &AuthResponse) {
    store::save_session(&response.token, &StoredUser::from(response));
}

/// Clear the persisted session and return to the login screen. Succeeds
/// without any network call and may be called when already logged out.
pub fn logout() {
    store::clear_session();
    log::info!("session cleared");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::routes::LOGIN);
        }
    }
}

/// Whether a token is currently stored. Expiry is not validated here; a
/// stale token surfaces as a 401 on the next call.
pub fn is_authenticated() -> bool {
    store::token().is_some()
}

/// Rebuild the session view from the store; `None` if either slot is gone.
pub fn current_user() -> Option<AuthSession> {
    let token = store::token()?;
    let user = store::stored_user()?;
    Some(AuthSession { token, user })
}

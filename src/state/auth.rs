#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::auth::AuthSession;

/// Authentication state tracking the current session and login progress.
///
/// Provided as an `RwSignal` context from the app root; the login page
/// writes it and every page that shows identity reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub loading: bool,
}

impl AuthState {
    /// Snapshot the persisted session into a fresh state.
    pub fn from_store() -> Self {
        Self { session: crate::session::auth::current_user(), loading: false }
    }
}

use super::*;
use crate::net::types::{Role, StoredUser};
use crate::session::store;

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn from_store_snapshots_the_persisted_session() {
    store::clear_session();
    assert_eq!(AuthState::from_store(), AuthState::default());

    let user = StoredUser {
        id: 8,
        name: "Acme".to_owned(),
        email: "hr@acme.example".to_owned(),
        role: "COMPANY".to_owned(),
    };
    store::save_session("jwt", &user);

    let state = AuthState::from_store();
    let session = state.session.expect("session should be present");
    assert_eq!(session.user.id, 8);
    assert_eq!(session.role(), Some(Role::Company));

    store::clear_session();
}

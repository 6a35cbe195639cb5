use super::*;

fn sample_user() -> StoredUser {
    StoredUser {
        id: 12,
        name: "Lea".to_owned(),
        email: "lea@example.com".to_owned(),
        role: "STUDENT".to_owned(),
    }
}

#[test]
fn save_session_stores_both_slots() {
    clear_session();
    save_session("jwt-123", &sample_user());

    assert_eq!(token().as_deref(), Some("jwt-123"));
    assert_eq!(stored_user(), Some(sample_user()));
}

#[test]
fn save_session_overwrites_previous_pair() {
    clear_session();
    save_session("jwt-old", &sample_user());

    let replacement = StoredUser { id: 99, role: "ADMIN".to_owned(), ..sample_user() };
    save_session("jwt-new", &replacement);

    assert_eq!(token().as_deref(), Some("jwt-new"));
    assert_eq!(stored_user().map(|user| user.id), Some(99));
}

#[test]
fn clear_session_is_idempotent() {
    save_session("jwt-123", &sample_user());

    clear_session();
    assert_eq!(token(), None);
    assert_eq!(stored_user(), None);

    // Clearing an already-empty store must also succeed.
    clear_session();
    assert_eq!(token(), None);
    assert_eq!(stored_user(), None);
}

#[test]
fn undecodable_profile_blob_reads_as_absent() {
    clear_session();
    write_raw_user("{not json");
    assert_eq!(stored_user(), None);
}

#[test]
fn empty_store_reads_as_absent() {
    clear_session();
    assert_eq!(token(), None);
    assert_eq!(stored_user(), None);
}

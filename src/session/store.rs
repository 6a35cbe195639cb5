//! Persisted session slots: auth token and user profile blob.
//!
//! Browser builds keep both slots in `localStorage`, so a reload keeps the
//! session; non-browser builds fall back to a per-thread in-memory map so
//! server rendering stays ephemeral and the persistence path is testable.
//! The pair invariant: token and profile are written together and cleared
//! together, never one without the other.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::StoredUser;

const TOKEN_KEY: &str = "portal_token";
const USER_KEY: &str = "portal_user";

#[cfg(feature = "hydrate")]
mod slots {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    pub fn read(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn write(key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod slots {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static SLOTS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        SLOTS.with(|slots| slots.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        SLOTS.with(|slots| {
            slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        SLOTS.with(|slots| {
            slots.borrow_mut().remove(key);
        });
    }
}

/// The persisted auth token, if any.
pub fn token() -> Option<String> {
    slots::read(TOKEN_KEY)
}

/// The persisted user profile, if present and decodable.
pub fn stored_user() -> Option<StoredUser> {
    let raw = slots::read(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persist a session as a pair: token plus profile blob.
pub fn save_session(token: &str, user: &StoredUser) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    slots::write(TOKEN_KEY, token);
    slots::write(USER_KEY, &raw);
}

/// Drop both slots. Safe to call repeatedly or when nothing is stored.
pub fn clear_session() {
    slots::remove(TOKEN_KEY);
    slots::remove(USER_KEY);
}

#[cfg(test)]
pub(crate) fn write_raw_user(raw: &str) {
    slots::write(USER_KEY, raw);
}

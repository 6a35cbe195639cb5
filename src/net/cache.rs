//! Time-boxed response cache for idempotent reads.
//!
//! DESIGN
//! ======
//! Entries are keyed by request identity (path plus serialized query
//! parameters) and stay fresh for a fixed duration from insertion. A
//! re-fetch of the same key replaces the entry; nothing is evicted eagerly
//! and writes elsewhere never invalidate entries. The cache lives only for
//! the lifetime of the page and is never persisted.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use serde_json::Value;

/// How long a cached payload stays fresh, in milliseconds.
pub const CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

#[derive(Clone, Debug)]
struct CacheEntry {
    payload: Value,
    inserted_at_ms: f64,
}

/// In-memory GET cache. Not shared across threads; the single-threaded
/// browser event loop is the only writer.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    /// Look up a fresh payload for `key` as of `now_ms`. Expired entries
    /// count as absent and stay in place until the next insert supersedes
    /// them.
    pub fn fresh(&self, key: &str, now_ms: f64) -> Option<Value> {
        let entry = self.entries.get(key)?;
        (now_ms - entry.inserted_at_ms < CACHE_TTL_MS).then(|| entry.payload.clone())
    }

    /// Store `payload` under `key`, superseding any previous entry.
    pub fn insert(&mut self, key: String, payload: Value, now_ms: f64) {
        self.entries.insert(key, CacheEntry { payload, inserted_at_ms: now_ms });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Request identity for caching: the path plus every query parameter in
/// call order. Identical path + params always produce the identical key.
pub fn cache_key(path: &str, params: &[(&str, String)]) -> String {
    use std::fmt::Write as _;

    let mut key = String::from(path);
    for (name, value) in params {
        let _ = write!(key, "&{name}={value}");
    }
    key
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

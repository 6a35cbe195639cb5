//! Authenticated request core for the portal API.
//!
//! Every outbound call goes through [`request`]: the bearer token is
//! attached whenever the session store holds one, idempotent GETs are served
//! from the time-boxed response cache when fresh, and failures are
//! classified into [`ApiError`] before they reach the caller.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the persisted session and redirects to the login route at
//! most once at a time; every other classified failure propagates to the
//! caller for page-level display. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cache::{ResponseCache, cache_key, now_ms};
use super::error::ApiError;
use crate::session::store;

/// Fixed base path of the remote API, same-origin.
pub const API_BASE: &str = "/api";

thread_local! {
    static CACHE: RefCell<ResponseCache> = RefCell::new(ResponseCache::default());
}

#[cfg(feature = "hydrate")]
thread_local! {
    /// Set while a 401-triggered redirect is in flight so concurrent
    /// failures do not stack navigations.
    static REDIRECTING: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// HTTP verbs used against the portal API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Only idempotent, body-less reads are ever cached.
    fn is_cacheable(self) -> bool {
        matches!(self, Self::Get)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Routes where a 401 must not bounce the visitor: they are already on an
/// unauthenticated screen.
#[cfg(any(test, feature = "hydrate"))]
fn on_auth_exempt_route(pathname: &str) -> bool {
    pathname.starts_with(crate::routes::LOGIN) || pathname.starts_with("/register")
}

/// Perform one call against the portal API and return the raw JSON payload.
///
/// GETs consult the response cache first and repopulate it on success;
/// write verbs always dispatch. A 401 additionally tears the session down
/// via [`handle_unauthorized`] before the error is returned.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for transport failures, non-success
/// statuses, and undecodable bodies.
pub async fn request<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
    params: &[(&str, String)],
) -> Result<Value, ApiError> {
    let key = cache_key(path, params);
    if method.is_cacheable() {
        let cached = CACHE.with(|cache| cache.borrow().fresh(&key, now_ms()));
        if let Some(payload) = cached {
            log::debug!("cache hit for {key}");
            return Ok(payload);
        }
    }

    let token = store::token();
    if token.is_none() {
        log::debug!("no auth token attached for {path}");
    }

    match dispatch(method, path, body, params, token.as_deref()).await {
        Ok(payload) => {
            if method.is_cacheable() {
                CACHE.with(|cache| {
                    cache.borrow_mut().insert(key, payload.clone(), now_ms());
                });
            }
            Ok(payload)
        }
        Err(error) => {
            log::error!("{method:?} {path} failed: {error}");
            if error == ApiError::Unauthenticated {
                handle_unauthorized();
            }
            Err(error)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
    params: &[(&str, String)],
    token: Option<&str>,
) -> Result<Value, ApiError> {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    if !params.is_empty() {
        builder = builder.query(params.iter().map(|(name, value)| (*name, value.as_str())));
    }
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }

    let request = match body {
        Some(body) => builder.json(body).map_err(|error| ApiError::Decode(error.to_string()))?,
        None => builder.build().map_err(|error| ApiError::Decode(error.to_string()))?,
    };

    let response = request.send().await.map_err(|_| ApiError::Network)?;
    if let Some(error) = ApiError::from_status(response.status()) {
        return Err(error);
    }

    let raw = response.text().await.map_err(|error| ApiError::Decode(error.to_string()))?;
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&raw).map_err(|error| ApiError::Decode(error.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
    params: &[(&str, String)],
    token: Option<&str>,
) -> Result<Value, ApiError> {
    // No transport outside the browser; resources resolve once hydrated.
    let _ = (method, path, body, params, token);
    Err(ApiError::Network)
}

/// Session teardown on 401: clear both stored slots, then leave for the
/// login screen unless the visitor is already on an unauthenticated route
/// or another failed call got there first.
fn handle_unauthorized() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            store::clear_session();
            return;
        };
        let pathname = window.location().pathname().unwrap_or_default();
        if on_auth_exempt_route(&pathname) {
            return;
        }
        if REDIRECTING.replace(true) {
            return;
        }
        store::clear_session();
        log::warn!("session rejected; returning to login");
        let _ = window.location().set_href(crate::routes::LOGIN);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        store::clear_session();
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|error| ApiError::Decode(error.to_string()))
}

/// GET `path` and decode the JSON payload.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(request::<()>(Method::Get, path, None, &[]).await?)
}

/// GET `path` with query parameters and decode the JSON payload.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get_with_params<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
) -> Result<T, ApiError> {
    decode(request::<()>(Method::Get, path, None, params).await?)
}

/// POST `body` to `path` and decode the JSON payload.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode(request(Method::Post, path, Some(body), &[]).await?)
}

/// PUT `body` to `path` and decode the JSON payload.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode(request(Method::Put, path, Some(body), &[]).await?)
}

/// PATCH `path`, optionally with a body, and decode the JSON payload.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    decode(request(Method::Patch, path, body, &[]).await?)
}

/// DELETE `path`, discarding any response body.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn delete(path: &str) -> Result<(), ApiError> {
    request::<()>(Method::Delete, path, None, &[]).await?;
    Ok(())
}

#[cfg(test)]
fn seed_cache(key: &str, payload: Value) {
    CACHE.with(|cache| {
        cache.borrow_mut().insert(key.to_owned(), payload, now_ms());
    });
}

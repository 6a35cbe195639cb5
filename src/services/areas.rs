//! Area lookup and administration endpoints.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Area, AreaDraft};

fn area_endpoint(id: i64) -> String {
    format!("/areas/{id}")
}

fn admin_area_endpoint(id: i64) -> String {
    format!("/admin/areas/{id}")
}

/// List every registered area.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list() -> Result<Vec<Area>, ApiError> {
    http::get("/areas").await
}

/// Fetch one area by id.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get(id: i64) -> Result<Area, ApiError> {
    http::get(&area_endpoint(id)).await
}

/// Create an area (administrators only).
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn create(draft: &AreaDraft) -> Result<Area, ApiError> {
    http::post("/admin/areas", draft).await
}

/// Rename an existing area (administrators only).
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn update(id: i64, draft: &AreaDraft) -> Result<Area, ApiError> {
    http::put(&admin_area_endpoint(id), draft).await
}

/// Delete an area (administrators only).
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&admin_area_endpoint(id)).await
}

//! Administrative dashboard endpoint.

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::DashboardSummary;

/// Fetch the aggregate counts shown on the admin dashboard.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn dashboard() -> Result<DashboardSummary, ApiError> {
    http::get("/admin/dashboard").await
}

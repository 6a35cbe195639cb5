//! Company registration and profile endpoints.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Company, CompanyRegistration};

fn company_endpoint(id: i64) -> String {
    format!("/companies/{id}")
}

/// Register a new company account. Unauthenticated.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn register(registration: &CompanyRegistration) -> Result<Company, ApiError> {
    http::post("/companies", registration).await
}

/// Fetch a company profile by id.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get(id: i64) -> Result<Company, ApiError> {
    http::get(&company_endpoint(id)).await
}

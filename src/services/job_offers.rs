//! Job-offer browsing and lifecycle endpoints.

#[cfg(test)]
#[path = "job_offers_test.rs"]
mod job_offers_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{JobOffer, JobOfferDraft, OfferStatistics};

fn offer_endpoint(id: i64) -> String {
    format!("/job-offers/{id}")
}

fn company_offers_endpoint(company_id: i64) -> String {
    format!("/job-offers/company/{company_id}")
}

fn area_offers_endpoint(area_id: i64) -> String {
    format!("/job-offers/area/{area_id}")
}

fn close_endpoint(id: i64) -> String {
    format!("/job-offers/{id}/close")
}

/// List every offer, open and closed.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list() -> Result<Vec<JobOffer>, ApiError> {
    http::get("/job-offers").await
}

/// List offers that still accept applications.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_active() -> Result<Vec<JobOffer>, ApiError> {
    http::get("/job-offers/active").await
}

/// List a company's active offers.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_by_company(company_id: i64) -> Result<Vec<JobOffer>, ApiError> {
    http::get(&company_offers_endpoint(company_id)).await
}

/// List active offers in one area.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_by_area(area_id: i64) -> Result<Vec<JobOffer>, ApiError> {
    http::get(&area_offers_endpoint(area_id)).await
}

/// Fetch one offer by id.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get(id: i64) -> Result<JobOffer, ApiError> {
    http::get(&offer_endpoint(id)).await
}

/// Publish a new offer.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn create(draft: &JobOfferDraft) -> Result<JobOffer, ApiError> {
    http::post("/job-offers", draft).await
}

/// Update an existing offer.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn update(id: i64, draft: &JobOfferDraft) -> Result<JobOffer, ApiError> {
    http::put(&offer_endpoint(id), draft).await
}

/// Close an offer to further applications.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn close(id: i64) -> Result<JobOffer, ApiError> {
    http::patch::<(), JobOffer>(&close_endpoint(id), None).await
}

/// Delete an offer outright.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&offer_endpoint(id)).await
}

/// Open/closed totals grouped by area.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn statistics() -> Result<OfferStatistics, ApiError> {
    http::get("/job-offers/statistics").await
}

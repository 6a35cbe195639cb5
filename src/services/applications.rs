//! Application listing and lifecycle endpoints.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use serde::Serialize;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Application, ApplicationDraft, ApplicationStatus, EntityRef};

fn application_endpoint(id: i64) -> String {
    format!("/applications/{id}")
}

fn student_applications_endpoint(student_id: i64) -> String {
    format!("/applications/student/{student_id}")
}

fn company_applications_endpoint(company_id: i64) -> String {
    format!("/applications/company/{company_id}")
}

fn offer_applications_endpoint(job_offer_id: i64) -> String {
    format!("/applications/job-offer/{job_offer_id}")
}

fn status_endpoint(id: i64) -> String {
    format!("/applications/{id}/status")
}

#[derive(Serialize)]
struct StatusUpdate {
    status: ApplicationStatus,
}

/// List a student's applications.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_by_student(student_id: i64) -> Result<Vec<Application>, ApiError> {
    http::get(&student_applications_endpoint(student_id)).await
}

/// List every application against a company's offers.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_by_company(company_id: i64) -> Result<Vec<Application>, ApiError> {
    http::get(&company_applications_endpoint(company_id)).await
}

/// List applications to one job offer.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn list_by_offer(job_offer_id: i64) -> Result<Vec<Application>, ApiError> {
    http::get(&offer_applications_endpoint(job_offer_id)).await
}

/// Apply a student to a job offer.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn apply(student_id: i64, job_offer_id: i64) -> Result<Application, ApiError> {
    let draft = ApplicationDraft {
        student: EntityRef { id: student_id },
        job_offer: EntityRef { id: job_offer_id },
    };
    http::post("/applications", &draft).await
}

/// Move an application to a new status (company side).
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn set_status(id: i64, status: ApplicationStatus) -> Result<Application, ApiError> {
    http::patch(&status_endpoint(id), Some(&StatusUpdate { status })).await
}

/// Withdraw an application.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn withdraw(id: i64) -> Result<(), ApiError> {
    http::delete(&application_endpoint(id)).await
}

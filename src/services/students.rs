//! Student registration and profile endpoints.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Student, StudentRegistration};

fn student_endpoint(id: i64) -> String {
    format!("/students/{id}")
}

/// Register a new student account. Unauthenticated.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn register(registration: &StudentRegistration) -> Result<Student, ApiError> {
    http::post("/students", registration).await
}

/// Fetch a student profile with its resume.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn get(id: i64) -> Result<Student, ApiError> {
    http::get(&student_endpoint(id)).await
}

/// Replace a student profile with the edited record.
///
/// # Errors
///
/// Propagates the classified [`ApiError`].
pub async fn update(student: &Student) -> Result<Student, ApiError> {
    http::put(&student_endpoint(student.id), student).await
}

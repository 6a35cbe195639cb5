use super::*;

#[test]
fn application_endpoint_formats_expected_path() {
    assert_eq!(application_endpoint(3), "/applications/3");
}

#[test]
fn listing_endpoints_format_expected_paths() {
    assert_eq!(student_applications_endpoint(5), "/applications/student/5");
    assert_eq!(company_applications_endpoint(6), "/applications/company/6");
    assert_eq!(offer_applications_endpoint(7), "/applications/job-offer/7");
}

#[test]
fn status_endpoint_formats_expected_path() {
    assert_eq!(status_endpoint(3), "/applications/3/status");
}

#[test]
fn status_update_serializes_wire_status() {
    let update = StatusUpdate { status: ApplicationStatus::InReview };
    assert_eq!(
        serde_json::to_value(&update).ok(),
        Some(serde_json::json!({"status": "IN_REVIEW"}))
    );
}

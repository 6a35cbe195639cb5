use super::*;

#[test]
fn student_endpoint_formats_expected_path() {
    assert_eq!(student_endpoint(14), "/students/14");
}

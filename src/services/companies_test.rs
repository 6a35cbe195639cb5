use super::*;

#[test]
fn company_endpoint_formats_expected_path() {
    assert_eq!(company_endpoint(21), "/companies/21");
}

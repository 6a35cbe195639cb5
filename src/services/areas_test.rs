use super::*;

#[test]
fn area_endpoint_formats_expected_path() {
    assert_eq!(area_endpoint(7), "/areas/7");
}

#[test]
fn admin_area_endpoint_formats_expected_path() {
    assert_eq!(admin_area_endpoint(7), "/admin/areas/7");
}

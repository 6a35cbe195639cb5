use super::*;

#[test]
fn offer_endpoint_formats_expected_path() {
    assert_eq!(offer_endpoint(12), "/job-offers/12");
}

#[test]
fn company_offers_endpoint_formats_expected_path() {
    assert_eq!(company_offers_endpoint(4), "/job-offers/company/4");
}

#[test]
fn area_offers_endpoint_formats_expected_path() {
    assert_eq!(area_offers_endpoint(9), "/job-offers/area/9");
}

#[test]
fn close_endpoint_formats_expected_path() {
    assert_eq!(close_endpoint(12), "/job-offers/12/close");
}

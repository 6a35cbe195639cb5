use super::*;
use crate::net::cache::cache_key;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/areas"), "/api/areas");
    assert_eq!(endpoint("/job-offers/3/close"), "/api/job-offers/3/close");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn only_get_is_cacheable() {
    assert!(Method::Get.is_cacheable());
    assert!(!Method::Post.is_cacheable());
    assert!(!Method::Put.is_cacheable());
    assert!(!Method::Patch.is_cacheable());
    assert!(!Method::Delete.is_cacheable());
}

#[test]
fn login_and_registration_routes_are_auth_exempt() {
    assert!(on_auth_exempt_route("/login"));
    assert!(on_auth_exempt_route("/register/student"));
    assert!(on_auth_exempt_route("/register/company"));
    assert!(!on_auth_exempt_route("/"));
    assert!(!on_auth_exempt_route("/admin/areas"));
}

#[test]
fn fresh_cache_entry_short_circuits_dispatch() {
    // Dispatch has no transport here, so a successful result can only have
    // come from the cache.
    seed_cache(
        &cache_key("/areas", &[]),
        json!([{"id": 1, "name": "Software"}]),
    );

    let payload = block_on(get::<Value>("/areas"));
    assert_eq!(payload, Ok(json!([{"id": 1, "name": "Software"}])));
}

#[test]
fn cache_key_includes_query_params() {
    seed_cache(
        &cache_key("/job-offers", &[("area", "3".to_owned())]),
        json!([]),
    );

    // Same path, different identity: not served from the seeded entry.
    let plain = block_on(get::<Value>("/job-offers"));
    assert_eq!(plain, Err(ApiError::Network));

    let filtered =
        block_on(get_with_params::<Value>("/job-offers", &[("area", "3".to_owned())]));
    assert_eq!(filtered, Ok(json!([])));
}

#[test]
fn write_verbs_never_read_the_cache() {
    seed_cache(&cache_key("/auth/login", &[]), json!({"token": "t"}));

    let result = block_on(post::<_, Value>("/auth/login", &json!({"email": "x"})));
    assert_eq!(result, Err(ApiError::Network));
}

#[test]
fn uncached_get_reports_network_failure_without_transport() {
    let result = block_on(get::<Value>("/companies/9"));
    assert_eq!(result, Err(ApiError::Network));
}

#[test]
fn delete_propagates_classified_failure() {
    let result = block_on(delete("/applications/5"));
    assert_eq!(result, Err(ApiError::Network));
}

use super::*;

#[test]
fn success_statuses_classify_as_none() {
    assert_eq!(ApiError::from_status(200), None);
    assert_eq!(ApiError::from_status(201), None);
    assert_eq!(ApiError::from_status(204), None);
    assert_eq!(ApiError::from_status(299), None);
}

#[test]
fn auth_statuses_classify_specifically() {
    assert_eq!(ApiError::from_status(401), Some(ApiError::Unauthenticated));
    assert_eq!(ApiError::from_status(403), Some(ApiError::Forbidden));
}

#[test]
fn other_statuses_classify_as_server_failures() {
    assert_eq!(ApiError::from_status(400), Some(ApiError::Server(400)));
    assert_eq!(ApiError::from_status(404), Some(ApiError::Server(404)));
    assert_eq!(ApiError::from_status(500), Some(ApiError::Server(500)));
    assert_eq!(ApiError::from_status(302), Some(ApiError::Server(302)));
}

#[test]
fn display_messages_are_user_presentable() {
    assert_eq!(ApiError::Network.to_string(), "could not reach the server");
    assert_eq!(ApiError::Server(500).to_string(), "server error: status 500");
    assert_eq!(
        ApiError::Decode("missing field `id`".to_owned()).to_string(),
        "malformed response: missing field `id`"
    );
}

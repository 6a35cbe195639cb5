use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  lea@example.com  ", " secret "),
        Ok(Credentials { email: "lea@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(
        validate_login_input("lea@example.com", "   "),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_login_input("", ""), Err("Enter both email and password."));
}

#[test]
fn post_login_route_follows_declared_role() {
    assert_eq!(post_login_route("ADMIN"), routes::ADMIN_HOME);
    assert_eq!(post_login_route("COMPANY"), routes::COMPANY_HOME);
    assert_eq!(post_login_route("STUDENT"), routes::STUDENT_HOME);
    assert_eq!(post_login_route("SOMETHING_ELSE"), routes::HOME);
}

#[test]
fn login_error_message_distinguishes_transport_loss() {
    assert_eq!(
        login_error_message(&ApiError::Unauthenticated),
        "Invalid email or password. Please try again."
    );
    assert_eq!(
        login_error_message(&ApiError::Server(500)),
        "Invalid email or password. Please try again."
    );
    assert_eq!(login_error_message(&ApiError::Network), "could not reach the server");
}

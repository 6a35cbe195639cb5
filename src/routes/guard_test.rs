use super::*;

fn user_with_role(role: &str) -> StoredUser {
    StoredUser {
        id: 1,
        name: "Visitor".to_owned(),
        email: "visitor@example.com".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn missing_token_always_redirects_to_login() {
    let user = user_with_role("ADMIN");
    for allowed in [None, Some(&[Role::Admin][..]), Some(&[Role::Company][..])] {
        assert_eq!(decide(None, Some(&user), allowed), RouteDecision::Redirect(routes::LOGIN));
        assert_eq!(decide(None, None, allowed), RouteDecision::Redirect(routes::LOGIN));
    }
}

#[test]
fn token_without_profile_blob_redirects_to_login() {
    assert_eq!(
        decide(Some("jwt"), None, Some(&[Role::Admin])),
        RouteDecision::Redirect(routes::LOGIN)
    );
    assert_eq!(decide(Some("jwt"), None, None), RouteDecision::Redirect(routes::LOGIN));
}

#[test]
fn unrestricted_route_admits_any_session() {
    for role in ["ADMIN", "COMPANY", "STUDENT", "SOMETHING_ELSE"] {
        let user = user_with_role(role);
        assert_eq!(decide(Some("jwt"), Some(&user), None), RouteDecision::Allow);
    }
}

#[test]
fn matching_role_is_allowed() {
    let user = user_with_role("COMPANY");
    assert_eq!(decide(Some("jwt"), Some(&user), Some(&[Role::Company])), RouteDecision::Allow);

    let user = user_with_role("ADMIN");
    assert_eq!(
        decide(Some("jwt"), Some(&user), Some(&[Role::Admin, Role::Company])),
        RouteDecision::Allow
    );
}

#[test]
fn mismatched_role_redirects_to_its_own_home() {
    let student = user_with_role("STUDENT");
    assert_eq!(
        decide(Some("jwt"), Some(&student), Some(&[Role::Admin])),
        RouteDecision::Redirect(routes::STUDENT_HOME)
    );

    let company = user_with_role("COMPANY");
    assert_eq!(
        decide(Some("jwt"), Some(&company), Some(&[Role::Student])),
        RouteDecision::Redirect(routes::COMPANY_HOME)
    );

    let admin = user_with_role("ADMIN");
    assert_eq!(
        decide(Some("jwt"), Some(&admin), Some(&[Role::Company])),
        RouteDecision::Redirect(routes::ADMIN_HOME)
    );
}

#[test]
fn unrecognized_role_redirects_to_public_home() {
    let user = user_with_role("SUPERVISOR");
    assert_eq!(
        decide(Some("jwt"), Some(&user), Some(&[Role::Admin])),
        RouteDecision::Redirect(routes::HOME)
    );
}

#[test]
fn decision_is_total_and_stable_over_the_input_space() {
    let roles = ["ADMIN", "COMPANY", "STUDENT", "SOMETHING_ELSE"];
    let allow_lists: [Option<&[Role]>; 4] = [
        None,
        Some(&[Role::Admin]),
        Some(&[Role::Company]),
        Some(&[Role::Student]),
    ];

    for token in [None, Some("jwt")] {
        for role in roles {
            let user = user_with_role(role);
            for allowed in allow_lists {
                let first = decide(token, Some(&user), allowed);
                let second = decide(token, Some(&user), allowed);
                // Same inputs, same outcome, and always one of the three
                // legal results.
                assert_eq!(first, second);
                assert!(matches!(
                    first,
                    RouteDecision::Allow
                        | RouteDecision::Redirect(
                            routes::LOGIN
                                | routes::HOME
                                | routes::ADMIN_HOME
                                | routes::COMPANY_HOME
                                | routes::STUDENT_HOME
                        )
                ));
            }
        }
    }
}

#[test]
fn decide_current_reads_the_live_store() {
    store::clear_session();
    assert_eq!(decide_current(Some(&[Role::Admin])), RouteDecision::Redirect(routes::LOGIN));

    store::save_session("jwt", &user_with_role("ADMIN"));
    assert_eq!(decide_current(Some(&[Role::Admin])), RouteDecision::Allow);
    assert_eq!(
        decide_current(Some(&[Role::Student])),
        RouteDecision::Redirect(routes::ADMIN_HOME)
    );

    store::clear_session();
}

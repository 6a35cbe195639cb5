use super::*;

#[test]
fn role_round_trips_wire_strings() {
    for (role, wire) in [
        (Role::Admin, "\"ADMIN\""),
        (Role::Company, "\"COMPANY\""),
        (Role::Student, "\"STUDENT\""),
    ] {
        assert_eq!(serde_json::to_string(&role).as_deref().map_err(drop), Ok(wire));
        assert_eq!(serde_json::from_str::<Role>(wire).ok(), Some(role));
    }
}

#[test]
fn role_parse_accepts_known_values_only() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("COMPANY"), Some(Role::Company));
    assert_eq!(Role::parse("STUDENT"), Some(Role::Student));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("MANAGER"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_matches_parse() {
    for role in [Role::Admin, Role::Company, Role::Student] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn work_mode_uses_screaming_snake_case() {
    assert_eq!(serde_json::to_string(&WorkMode::OnSite).as_deref().map_err(drop), Ok("\"ON_SITE\""));
    assert_eq!(serde_json::from_str::<WorkMode>("\"HYBRID\"").ok(), Some(WorkMode::Hybrid));
}

#[test]
fn application_status_uses_screaming_snake_case() {
    assert_eq!(
        serde_json::to_string(&ApplicationStatus::InReview).as_deref().map_err(drop),
        Ok("\"IN_REVIEW\"")
    );
    assert_eq!(
        serde_json::from_str::<ApplicationStatus>("\"REJECTED\"").ok(),
        Some(ApplicationStatus::Rejected)
    );
}

#[test]
fn stored_user_parses_role_leniently() {
    let user = StoredUser {
        id: 7,
        name: "Dana".to_owned(),
        email: "dana@example.com".to_owned(),
        role: "STUDENT".to_owned(),
    };
    assert_eq!(user.role(), Some(Role::Student));

    let odd = StoredUser { role: "INTERN".to_owned(), ..user };
    assert_eq!(odd.role(), None);
}

#[test]
fn stored_user_from_auth_response_drops_token() {
    let response = AuthResponse {
        token: "jwt-abc".to_owned(),
        id: 42,
        name: "Acme".to_owned(),
        email: "hr@acme.example".to_owned(),
        role: "COMPANY".to_owned(),
    };
    let stored = StoredUser::from(&response);
    assert_eq!(stored.id, 42);
    assert_eq!(stored.role(), Some(Role::Company));
    assert!(serde_json::to_string(&stored).is_ok_and(|raw| !raw.contains("jwt-abc")));
}

#[test]
fn job_offer_deserializes_full_payload() {
    let raw = serde_json::json!({
        "id": 11,
        "title": "Backend intern",
        "description": "Work on the placement API.",
        "location": "Porto Alegre",
        "work_mode": "HYBRID",
        "weekly_hours": 30,
        "requirements": "SQL basics",
        "active": true,
        "created_at": "2025-03-02T12:00:00Z",
        "updated_at": null,
        "closed_at": null,
        "company": {
            "id": 3,
            "name": "Acme",
            "email": "hr@acme.example",
            "phone": "555-0100",
            "role": "COMPANY",
            "tax_id": "00.000.000/0001-00",
            "address": "Main St 1",
            "business_areas": [{"id": 1, "name": "Software"}]
        },
        "area": {"id": 1, "name": "Software"}
    });

    let offer: JobOffer = serde_json::from_value(raw).expect("offer should decode");
    assert_eq!(offer.work_mode, WorkMode::Hybrid);
    assert_eq!(offer.weekly_hours, 30);
    assert_eq!(offer.company.role, Role::Company);
    assert_eq!(offer.area.name, "Software");
}

#[test]
fn student_resume_collections_default_to_empty() {
    let raw = serde_json::json!({
        "id": 5,
        "name": "Lea",
        "email": "lea@example.com",
        "phone": "555-0101",
        "role": "STUDENT",
        "national_id": "123.456.789-00",
        "course": "Computer Science",
        "birth_date": null,
        "linkedin": null,
        "github": null,
        "portfolio": null,
        "summary": null
    });

    let student: Student = serde_json::from_value(raw).expect("student should decode");
    assert!(student.education.is_empty());
    assert!(student.experience.is_empty());
    assert!(student.skills.is_empty());
    assert!(student.interest_areas.is_empty());
}

#[test]
fn dashboard_summary_decodes_area_pairs() {
    let raw = serde_json::json!({
        "total_companies": 4,
        "total_students": 120,
        "open_offers": 9,
        "closed_offers": 2,
        "offers_by_area": [["Software", 6], ["Design", 3]]
    });

    let summary: DashboardSummary = serde_json::from_value(raw).expect("summary should decode");
    assert_eq!(summary.offers_by_area.len(), 2);
    assert_eq!(summary.offers_by_area[0], ("Software".to_owned(), 6));
}

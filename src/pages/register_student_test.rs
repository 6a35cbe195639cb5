use super::*;

#[test]
fn build_registration_trims_fields_and_maps_areas() {
    let registration = build_registration(
        " Lea ",
        " lea@example.com ",
        "555-0101",
        "secret",
        "123.456.789-00",
        "Computer Science",
        &[2, 5],
    )
    .expect("registration should validate");

    assert_eq!(registration.name, "Lea");
    assert_eq!(registration.email, "lea@example.com");
    assert_eq!(
        registration.interest_areas,
        vec![EntityRef { id: 2 }, EntityRef { id: 5 }]
    );
}

#[test]
fn build_registration_requires_every_text_field() {
    let result = build_registration("Lea", "", "555", "pw", "id", "CS", &[]);
    assert_eq!(result, Err("Fill in every field."));

    let result = build_registration("Lea", "lea@example.com", "555", "  ", "id", "CS", &[]);
    assert_eq!(result, Err("Fill in every field."));
}

#[test]
fn build_registration_allows_empty_area_selection() {
    let registration =
        build_registration("Lea", "lea@example.com", "555", "pw", "id", "CS", &[])
            .expect("registration should validate");
    assert!(registration.interest_areas.is_empty());
}

use super::*;

#[test]
fn validate_area_name_trims_and_accepts() {
    assert_eq!(
        validate_area_name("  Software Engineering  "),
        Ok(AreaDraft { name: "Software Engineering".to_owned() })
    );
}

#[test]
fn validate_area_name_rejects_blank_input() {
    assert_eq!(validate_area_name(""), Err("Enter an area name."));
    assert_eq!(validate_area_name("   "), Err("Enter an area name."));
}

use super::*;

#[test]
fn parse_weekly_hours_accepts_the_working_range() {
    assert_eq!(parse_weekly_hours("10"), Ok(10));
    assert_eq!(parse_weekly_hours(" 30 "), Ok(30));
    assert_eq!(parse_weekly_hours("44"), Ok(44));
}

#[test]
fn parse_weekly_hours_rejects_out_of_range_and_garbage() {
    assert!(parse_weekly_hours("9").is_err());
    assert!(parse_weekly_hours("45").is_err());
    assert!(parse_weekly_hours("-5").is_err());
    assert!(parse_weekly_hours("thirty").is_err());
    assert!(parse_weekly_hours("").is_err());
}

#[test]
fn parse_work_mode_maps_select_values() {
    assert_eq!(parse_work_mode("ON_SITE"), WorkMode::OnSite);
    assert_eq!(parse_work_mode("REMOTE"), WorkMode::Remote);
    assert_eq!(parse_work_mode("HYBRID"), WorkMode::Hybrid);
    assert_eq!(parse_work_mode("anything"), WorkMode::OnSite);
}

#[test]
fn build_draft_assembles_references() {
    let draft = build_draft(
        7,
        "Backend intern",
        "Work on the placement API.",
        "Porto Alegre",
        "SQL basics",
        "HYBRID",
        "30",
        "3",
    )
    .expect("draft should validate");

    assert_eq!(draft.company, EntityRef { id: 7 });
    assert_eq!(draft.area, EntityRef { id: 3 });
    assert_eq!(draft.work_mode, WorkMode::Hybrid);
    assert_eq!(draft.weekly_hours, 30);
}

#[test]
fn build_draft_requires_text_fields_and_area() {
    assert_eq!(
        build_draft(7, "", "desc", "loc", "reqs", "REMOTE", "20", "1"),
        Err("Fill in every field.")
    );
    assert_eq!(
        build_draft(7, "title", "desc", "loc", "reqs", "REMOTE", "20", ""),
        Err("Pick an area for the offer.")
    );
}

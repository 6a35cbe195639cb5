use super::*;

#[test]
fn toggle_selection_adds_then_removes() {
    let mut selected = vec![1, 3];

    toggle_selection(&mut selected, 5);
    assert_eq!(selected, vec![1, 3, 5]);

    toggle_selection(&mut selected, 3);
    assert_eq!(selected, vec![1, 5]);
}

#[test]
fn toggle_selection_works_on_empty_list() {
    let mut selected = Vec::new();
    toggle_selection(&mut selected, 2);
    assert_eq!(selected, vec![2]);
}

#[test]
fn all_filled_rejects_blank_fields() {
    assert!(all_filled(&["Lea", "lea@example.com"]));
    assert!(!all_filled(&["Lea", "   "]));
    assert!(!all_filled(&[""]));
    assert!(all_filled(&[]));
}

//! Small pure helpers for form pages.
//!
//! Validation never leaves the form layer: a field that fails here is
//! reported inline and no request is issued.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Flip membership of `id` in a checkbox-backed selection list.
pub fn toggle_selection(selected: &mut Vec<i64>, id: i64) {
    if let Some(position) = selected.iter().position(|existing| *existing == id) {
        selected.remove(position);
    } else {
        selected.push(id);
    }
}

/// Whether every field has non-whitespace content.
pub fn all_filled(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

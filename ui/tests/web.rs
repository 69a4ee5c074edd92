//! Browser smoke tests: run with `wasm-pack test --headless --chrome ui`.
//! These go through the gloo-console logging path that native tests skip.

#![cfg(target_arch = "wasm32")]

use ui::form::{submit, FieldName, FormAction, FormState};
use ui::services::config::{DialogConfig, DialogIcon};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn change(field: FieldName, value: &str) -> FormAction {
    FormAction::Change {
        field,
        value: value.to_string(),
    }
}

#[wasm_bindgen_test]
fn valid_submission_resets_in_browser() {
    let mut state = FormState::default();
    state.reduce_in_place(change(FieldName::FirstName, "Ada"));
    state.reduce_in_place(change(FieldName::LastName, "Lovelace"));
    state.reduce_in_place(change(FieldName::Email, "ada@example.com"));

    let dialog = submit(&mut state, &DialogConfig::default());

    assert_eq!(dialog.icon, DialogIcon::Success);
    assert_eq!(state, FormState::default());
}

#[wasm_bindgen_test]
fn invalid_submission_keeps_state_in_browser() {
    let mut state = FormState::default();
    state.reduce_in_place(change(FieldName::FirstName, "Ada"));
    let before = state.clone();

    let dialog = submit(&mut state, &DialogConfig::default());

    assert_eq!(dialog.icon, DialogIcon::Error);
    assert_eq!(state, before);
}

use crate::form::{FieldName, FieldState, FormAction, FormState, Validity};
use crate::services::config::{DialogConfig, DialogContent};
use crate::{console_info, console_warn};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { invalid_fields: Vec<FieldName> },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

/// A field passes when it holds a value and its last validation said valid
fn field_passes(field: &FieldState) -> bool {
    !field.value.is_empty() && field.validity() == Some(Validity::Valid)
}

/// Validates that every field is filled and marked valid, straight from the store
pub fn evaluate_submission(state: &FormState) -> SubmissionOutcome {
    let invalid_fields: Vec<FieldName> = state
        .fields()
        .filter(|(_, field)| !field_passes(field))
        .map(|(name, _)| name)
        .collect();

    if invalid_fields.is_empty() {
        SubmissionOutcome::Accepted
    } else {
        SubmissionOutcome::Rejected { invalid_fields }
    }
}

/// Handles a submit: on success the store is reset, otherwise it is left as is
/// so the user can correct it. Returns the dialog to show.
pub fn submit(state: &mut FormState, dialogs: &DialogConfig) -> DialogContent {
    match evaluate_submission(state) {
        SubmissionOutcome::Accepted => {
            console_info!("[SUBMIT] User form accepted");
            state.reduce_in_place(FormAction::Reset);
            dialogs.success.clone()
        }
        SubmissionOutcome::Rejected { invalid_fields } => {
            let names: Vec<&str> = invalid_fields.iter().map(FieldName::as_str).collect();
            console_warn!("[SUBMIT] User form rejected, failing fields: {}", names.join(", "));
            dialogs.error.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::DialogIcon;
    use proptest::prelude::*;

    fn filled(first: &str, last: &str, email: &str) -> FormState {
        FormState::default()
            .reduce(FormAction::Change {
                field: FieldName::FirstName,
                value: first.to_string(),
            })
            .reduce(FormAction::Change {
                field: FieldName::LastName,
                value: last.to_string(),
            })
            .reduce(FormAction::Change {
                field: FieldName::Email,
                value: email.to_string(),
            })
    }

    #[test]
    fn test_valid_form_submits_and_resets() {
        let mut state = filled("Ada", "Lovelace", "ada@example.com");
        let dialog = submit(&mut state, &DialogConfig::default());

        assert_eq!(dialog.title, "Success!");
        assert_eq!(dialog.text, "User created");
        assert_eq!(dialog.icon, DialogIcon::Success);
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_missing_email_keeps_values() {
        let mut state = FormState::default()
            .reduce(FormAction::Change {
                field: FieldName::FirstName,
                value: "Ada".to_string(),
            })
            .reduce(FormAction::Change {
                field: FieldName::LastName,
                value: "Lovelace".to_string(),
            });
        let before = state.clone();

        let dialog = submit(&mut state, &DialogConfig::default());

        assert_eq!(dialog.title, "Error!");
        assert_eq!(dialog.text, "All fields are required and must be valid");
        assert_eq!(dialog.icon, DialogIcon::Error);
        assert_eq!(state, before);
    }

    #[test]
    fn test_untouched_form_is_rejected() {
        assert_eq!(
            evaluate_submission(&FormState::default()),
            SubmissionOutcome::Rejected {
                invalid_fields: FieldName::ALL.to_vec()
            }
        );
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let state = filled("Ada", "Lovelace", "not-an-email");
        assert_eq!(
            evaluate_submission(&state),
            SubmissionOutcome::Rejected {
                invalid_fields: vec![FieldName::Email]
            }
        );
    }

    #[test]
    fn test_cleared_field_is_rejected() {
        let state = filled("Ada", "", "ada@example.com");
        assert!(!evaluate_submission(&state).is_accepted());
    }

    proptest! {
        #[test]
        fn submission_gate_matches_field_rules(
            first in ".{0,6}",
            last in ".{0,6}",
            email in prop_oneof!["[a-z]{1,5}@[a-z]{1,5}\\.[a-z]{2,3}", ".{0,8}"],
        ) {
            let mut state = filled(&first, &last, &email);
            let before = state.clone();
            let expected = !first.is_empty()
                && !last.is_empty()
                && crate::utils::validation::is_valid_email(&email);

            let dialog = submit(&mut state, &DialogConfig::default());

            if expected {
                prop_assert_eq!(dialog.icon, DialogIcon::Success);
                prop_assert_eq!(state, FormState::default());
            } else {
                prop_assert_eq!(dialog.icon, DialogIcon::Error);
                prop_assert_eq!(state, before);
            }
        }
    }
}

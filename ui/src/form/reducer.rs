use crate::console_debug;
use crate::form::{FieldName, FieldState, FormAction, FormState};
use crate::utils::validation::validate_field;

/// Builds the state of `field` after the user typed `value` into it
fn changed_field(field: FieldName, value: String) -> FieldState {
    let error = validate_field(field, &value).into_field_error();
    FieldState {
        value,
        error: Some(error),
    }
}

impl FormState {
    /// Reduces the state based on an action
    pub fn reduce(self, action: FormAction) -> Self {
        match action {
            FormAction::Change { field, value } => {
                let updated = changed_field(field, value);
                console_debug!(
                    "[REDUCER] {} -> {:?}",
                    field,
                    updated.validity()
                );
                match field {
                    FieldName::FirstName => FormState {
                        first_name: updated,
                        ..self
                    },
                    FieldName::LastName => FormState {
                        last_name: updated,
                        ..self
                    },
                    FieldName::Email => FormState {
                        email: updated,
                        ..self
                    },
                }
            }
            FormAction::Reset => {
                console_debug!("[REDUCER] Form reset to initial state");
                FormState::default()
            }
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::Change { field, value } => {
                let updated = changed_field(field, value);
                console_debug!(
                    "[REDUCER] {} -> {:?}",
                    field,
                    updated.validity()
                );
                *self.field_mut(field) = updated;
            }
            FormAction::Reset => {
                console_debug!("[REDUCER] Form reset to initial state");
                *self = FormState::default();
            }
        }
    }
}

use dioxus::prelude::*;

use crate::console_error;
use crate::form::FormState;
use crate::services::errors::FormResult;

/// Compact JSON of the whole store, as shown under the form
pub fn state_json(state: &FormState) -> FormResult<String> {
    Ok(serde_json::to_string(state)?)
}

#[derive(Props, PartialEq, Clone)]
pub struct StateDumpProps {
    pub state: FormState,
}

#[component]
pub fn StateDump(props: StateDumpProps) -> Element {
    match state_json(&props.state) {
        Ok(json) => rsx! {
            div {
                class: "pt-5 state-dump",
                code { "{json}" }
            }
        },
        Err(e) => {
            console_error!("[FORM] Could not render state dump: {}", e);
            rsx! {
                div {
                    class: "pt-5 state-dump state-dump-error",
                    "{e}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldName, FormAction};

    #[test]
    fn test_initial_state_json() {
        assert_eq!(
            state_json(&FormState::default()).unwrap(),
            r#"{"firstName":{"value":"","error":null},"lastName":{"value":"","error":null},"email":{"value":"","error":null}}"#
        );
    }

    #[test]
    fn test_json_reflects_validation() {
        let state = FormState::default().reduce(FormAction::Change {
            field: FieldName::Email,
            value: "nope".to_string(),
        });
        let json = state_json(&state).unwrap();
        assert!(json.contains(
            r#""email":{"value":"nope","error":{"result":"is-invalid","message":"Please provide a valid email"}}"#
        ));
    }
}

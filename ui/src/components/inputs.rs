//! Input components for form validation and display

use dioxus::prelude::*;

use crate::form::{FieldError, FieldName, FieldState};
use crate::utils::validation::{feedback_class, input_class};

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub field: FieldName,
    pub state: FieldState,
    pub on_change: EventHandler<String>,
}

/// Labeled input bound to one form field, with its inline feedback underneath
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let name = props.field.as_str();
    let label = props.field.label();
    let input_type = props.field.input_kind().as_str();
    let class = input_class(&props.state);

    rsx! {
        div {
            class: "mb-3",
            label {
                class: "form-label",
                r#for: "{name}",
                "{label}"
            }
            input {
                id: "{name}",
                name: "{name}",
                class: "{class}",
                r#type: "{input_type}",
                value: "{props.state.value}",
                oninput: move |event| props.on_change.call(event.value())
            }
            if let Some(error) = props.state.error.clone() {
                ValidationFeedback { error: error }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidationFeedbackProps {
    pub error: FieldError,
}

#[component]
pub fn ValidationFeedback(props: ValidationFeedbackProps) -> Element {
    rsx! {
        p {
            class: "{feedback_class(props.error.result)}",
            "{props.error.message}"
        }
    }
}

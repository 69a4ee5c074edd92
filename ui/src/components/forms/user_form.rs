use dioxus::prelude::*;

use crate::components::inputs::ValidatedInput;
use crate::form::{FieldName, FormAction, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct UserFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn UserForm(props: UserFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "container p-3",
            div {
                class: "card",
                div {
                    class: "card-body",
                    form {
                        class: "row",
                        // Browser-side constraint validation would block submit before our controller runs
                        "novalidate": "true",
                        onsubmit: move |event: FormEvent| {
                            event.prevent_default();
                            props.on_submit.call(());
                        },

                        for field in FieldName::ALL {
                            ValidatedInput {
                                key: "{field}",
                                field: field,
                                state: state.read().field(field).clone(),
                                on_change: move |value: String| {
                                    dispatch.call(FormAction::Change { field, value });
                                }
                            }
                        }

                        div {
                            class: "mb-3",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                "Submit"
                            }
                        }
                    }
                }
            }
        }
    }
}

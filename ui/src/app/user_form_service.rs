use dioxus::prelude::*;

use crate::components::display::{AlertDialog, StateDump};
use crate::components::forms::UserForm;
use crate::console_info;
use crate::form::{submit, FormAction, FormState};
use crate::services::config::{DialogContent, FormConfig};

const USER_FORM_CSS: Asset = asset!("/assets/styling/user_form.css");

#[derive(Props, PartialEq, Clone)]
pub struct UserFormServiceProps {
    #[props(default)]
    pub config: FormConfig,
}

#[component]
pub fn UserFormService(props: UserFormServiceProps) -> Element {
    // Single source of truth for the form; submission reads it directly
    let mut state = use_signal(FormState::default);
    let mut active_dialog = use_signal(|| None::<DialogContent>);

    use_effect(move || {
        console_info!("[FORM] User form mounted");
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let dialogs = props.config.dialogs.clone();
    let on_submit = move |_: ()| {
        let dialog = state.with_mut(|s| submit(s, &dialogs));
        active_dialog.set(Some(dialog));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: USER_FORM_CSS }

        div {
            class: "user-form-container",

            if let Some(title) = props.config.title.clone() {
                h1 {
                    class: "form-title",
                    "{title}"
                }
            }

            UserForm {
                state: state,
                dispatch: dispatch,
                on_submit: on_submit
            }

            if props.config.show_state_dump {
                StateDump { state: state() }
            }

            if let Some(dialog) = active_dialog() {
                AlertDialog {
                    dialog: dialog,
                    on_confirm: move |_| active_dialog.set(None)
                }
            }
        }
    }
}

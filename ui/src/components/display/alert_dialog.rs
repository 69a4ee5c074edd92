use dioxus::prelude::*;

use crate::services::config::DialogContent;

#[derive(Props, PartialEq, Clone)]
pub struct AlertDialogProps {
    pub dialog: DialogContent,
    pub on_confirm: EventHandler<()>,
}

/// Blocking acknowledgment popup. The backdrop swallows clicks; only the
/// confirm button closes it.
#[component]
pub fn AlertDialog(props: AlertDialogProps) -> Element {
    let icon_class = props.dialog.icon.as_class();
    let glyph = props.dialog.icon.glyph();

    rsx! {
        div {
            class: "alert-backdrop",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                "aria-modal": "true",
                "aria-labelledby": "alert-dialog-title",
                div {
                    class: "{icon_class}",
                    "{glyph}"
                }
                h2 {
                    id: "alert-dialog-title",
                    class: "alert-title",
                    "{props.dialog.title}"
                }
                p {
                    class: "alert-text",
                    "{props.dialog.text}"
                }
                button {
                    class: "btn btn-primary alert-confirm",
                    r#type: "button",
                    autofocus: true,
                    onclick: move |_| props.on_confirm.call(()),
                    "{props.dialog.confirm_button_text}"
                }
            }
        }
    }
}

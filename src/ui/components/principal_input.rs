use dioxus::prelude::*;

use crate::ui::theme;

/// Number field for the principal. Emits the raw text on every keystroke.
#[component]
pub fn PrincipalInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "calc-field",
            label { class: theme::LABEL, r#for: "principal", "Principal Amount" }
            input {
                id: "principal",
                class: theme::INPUT,
                r#type: "number",
                min: "0",
                step: "any",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

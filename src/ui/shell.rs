use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "calc-app",
            header { class: "calc-header",
                h1 { class: "calc-header-title", "{APP_NAME}" }
                span { class: "calc-header-version", "{version}" }
            }
            main { class: "calc-main",
                {children}
            }
        }
    }
}

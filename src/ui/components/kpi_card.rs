use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "calc-kpi",
            h3 { class: "calc-kpi-title", "{title}" }
            p { class: "calc-kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "calc-kpi-description", "{desc}" }
            }
        }
    }
}

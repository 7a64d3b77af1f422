use dioxus::prelude::*;

/// Bootstrap danger alert; renders nothing for an empty message.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert alert-danger",
            role: "alert",
            "{message}"
        }
    }
}

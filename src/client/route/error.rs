use dioxus::prelude::*;

use crate::client::{component::Layout, viewer::Viewer};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorPageProps {
    pub status: u16,
    pub message: String,
}

#[component]
pub fn ErrorPage(props: ErrorPageProps) -> Element {
    rsx! {
        Layout {
            title: "Error",
            viewer: Viewer::Anonymous,
            div {
                class: "text-center py-5",
                h1 { class: "display-4", "{props.status}" }
                p { class: "lead", "{props.message}" }
                a { class: "btn btn-primary", href: "/", "Back to home" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::client::{component::Layout, viewer::Viewer};

#[derive(Props, Clone, PartialEq)]
pub struct LogoutPageProps {
    pub signed_out: bool,
}

#[component]
pub fn LogoutPage(props: LogoutPageProps) -> Element {
    rsx! {
        Layout {
            title: "Logged out",
            viewer: Viewer::Anonymous,
            div {
                class: "text-center py-5",
                h1 { "You have been logged out" }
                if props.signed_out {
                    p { class: "lead", "Thanks for visiting. See you on your next trip!" }
                } else {
                    p { class: "lead", "You are not signed in." }
                }
                a { class: "btn btn-primary me-2", href: "/login", "Login again" }
                a { class: "btn btn-outline-secondary", href: "/", "Home" }
            }
        }
    }
}

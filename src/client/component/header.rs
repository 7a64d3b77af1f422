use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, viewer::Viewer};

#[component]
pub fn Header(viewer: Viewer) -> Element {
    rsx! {
        nav {
            class: "navbar navbar-expand navbar-dark bg-dark mb-4",
            div {
                class: "container",
                a { class: "navbar-brand", href: "/", {SITE_NAME} }
                ul {
                    class: "navbar-nav me-auto",
                    li { class: "nav-item", a { class: "nav-link", href: "/destinations", "Destinations" } }
                    li { class: "nav-item", a { class: "nav-link", href: "/trips", "Trips" } }
                    li { class: "nav-item", a { class: "nav-link", href: "/guides", "Guides" } }
                    if viewer.is_signed_in() {
                        li { class: "nav-item", a { class: "nav-link", href: "/registrations", "My registrations" } }
                    }
                    if viewer.is_admin() {
                        li { class: "nav-item", a { class: "nav-link", href: "/api-test", "API test" } }
                    }
                }
                match &viewer {
                    Viewer::SignedIn { display_name, .. } => rsx! {
                        span { class: "navbar-text me-3", "Hello, {display_name}" }
                        a { class: "btn btn-outline-light btn-sm", href: "/logout", "Logout" }
                    },
                    Viewer::Anonymous => rsx! {
                        a { class: "btn btn-outline-light btn-sm me-2", href: "/login", "Login" }
                        a { class: "btn btn-light btn-sm", href: "/register", "Register" }
                    },
                }
            }
        }
    }
}

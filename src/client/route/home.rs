use dioxus::prelude::*;

use crate::client::{component::Layout, constant::SITE_NAME, viewer::Viewer};

#[derive(Props, Clone, PartialEq)]
pub struct HomePageProps {
    pub viewer: Viewer,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let greeting = match &props.viewer {
        Viewer::SignedIn { display_name, .. } => format!("Welcome back, {}!", display_name),
        Viewer::Anonymous => format!("Welcome to {}", SITE_NAME),
    };

    rsx! {
        Layout {
            title: "Home",
            viewer: props.viewer.clone(),
            div {
                class: "p-5 mb-4 bg-light rounded-3",
                h1 { class: "display-5 fw-bold", "{greeting}" }
                p { class: "fs-5", "Browse destinations, pick a trip and meet the guides who lead them." }
                a { class: "btn btn-primary btn-lg me-2", href: "/trips", "Find a trip" }
                a { class: "btn btn-outline-secondary btn-lg", href: "/destinations", "Explore destinations" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::client::{
    component::Header,
    constant::{SITE_NAME, STYLESHEET_URL},
    viewer::Viewer,
};

/// Document head and body: navigation header and page content.
///
/// `render_page` wraps the result in the `<html>` root.
#[component]
pub fn Layout(title: String, viewer: Viewer, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: STYLESHEET_URL }
        }
        body {
            Header { viewer }
            main {
                class: "container pb-5",
                {children}
            }
        }
    }
}

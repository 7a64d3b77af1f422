use axum::response::Html;
use dioxus::{dioxus_core::Properties, prelude::*};

/// Renders a page component with the given props into a complete HTML document.
///
/// The `<html>` root is written here because dioxus has no element for it; `Layout`
/// supplies the `head` and `body` inside.
pub fn render_page<P>(component: fn(P) -> Element, props: P) -> Html<String>
where
    P: Properties,
{
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    ))
}

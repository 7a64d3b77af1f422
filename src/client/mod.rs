//! Server-rendered views.
//!
//! Pages are dioxus components rendered to HTML strings on the server with
//! `dioxus-ssr`; nothing is hydrated in the browser. Route components take an explicit
//! props struct so handlers can build the props and hand them to `render_page`.

pub mod component;
pub mod constant;
pub mod render;
pub mod route;
pub mod viewer;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Layout},
        viewer::Viewer,
    },
    model::guide::GuideDto,
    server::model::guide::GuideForm,
};

#[derive(Props, Clone, PartialEq)]
pub struct GuideListProps {
    pub viewer: Viewer,
    pub guides: Vec<GuideDto>,
}

#[component]
pub fn GuideListPage(props: GuideListProps) -> Element {
    let is_admin = props.viewer.is_admin();

    rsx! {
        Layout {
            title: "Guides",
            viewer: props.viewer.clone(),
            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h1 { "Our guides" }
                if is_admin {
                    a { class: "btn btn-success", href: "/guides/create", "New guide" }
                }
            }
            if props.guides.is_empty() {
                p { class: "text-muted", "No guides yet." }
            }
            ul {
                class: "list-group",
                for guide in props.guides.iter() {
                    li {
                        key: "{guide.id}",
                        class: "list-group-item d-flex justify-content-between align-items-center",
                        a { href: "/guides/{guide.id}", {guide.full_name()} }
                        span { class: "badge bg-secondary", "{guide.years_of_experience} years" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct GuideDetailProps {
    pub viewer: Viewer,
    pub guide: GuideDto,
}

#[component]
pub fn GuideDetailPage(props: GuideDetailProps) -> Element {
    let guide = &props.guide;
    let is_admin = props.viewer.is_admin();

    rsx! {
        Layout {
            title: guide.full_name(),
            viewer: props.viewer.clone(),
            h1 { {guide.full_name()} }
            p { class: "text-muted", "{guide.years_of_experience} years of experience" }
            if let Some(bio) = &guide.bio {
                p { "{bio}" }
            }
            dl {
                class: "row",
                dt { class: "col-sm-2", "Email" }
                dd { class: "col-sm-10", a { href: "mailto:{guide.email}", "{guide.email}" } }
                if let Some(phone) = &guide.phone {
                    dt { class: "col-sm-2", "Phone" }
                    dd { class: "col-sm-10", "{phone}" }
                }
            }
            div {
                class: "d-flex gap-2",
                a { class: "btn btn-outline-secondary", href: "/guides", "Back to list" }
                if is_admin {
                    a { class: "btn btn-outline-primary", href: "/guides/{guide.id}/edit", "Edit" }
                    form {
                        method: "post",
                        action: "/guides/{guide.id}/delete",
                        button { class: "btn btn-outline-danger", r#type: "submit", "Delete" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct GuideFormProps {
    pub viewer: Viewer,
    pub heading: String,
    pub action: String,
    pub form: GuideForm,
    pub error: String,
}

#[component]
pub fn GuideFormPage(props: GuideFormProps) -> Element {
    let values = &props.form;

    rsx! {
        Layout {
            title: props.heading.clone(),
            viewer: props.viewer.clone(),
            h1 { class: "mb-4", "{props.heading}" }
            ErrorAlert { message: props.error.clone() }
            form {
                method: "post",
                action: "{props.action}",
                div {
                    class: "row",
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "First name" }
                        input { class: "form-control", name: "first_name", value: "{values.first_name}", required: true }
                    }
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "Last name" }
                        input { class: "form-control", name: "last_name", value: "{values.last_name}", required: true }
                    }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Email" }
                    input { class: "form-control", r#type: "email", name: "email", value: "{values.email}", required: true }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Phone" }
                    input { class: "form-control", name: "phone", value: "{values.phone}" }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Years of experience" }
                    input { class: "form-control", r#type: "number", min: "0", name: "years_of_experience", value: "{values.years_of_experience}" }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Bio" }
                    textarea { class: "form-control", name: "bio", rows: "4", "{values.bio}" }
                }
                button { class: "btn btn-primary me-2", r#type: "submit", "Save" }
                a { class: "btn btn-outline-secondary", href: "/guides", "Cancel" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Layout},
        route::{format_date, format_price},
        viewer::Viewer,
    },
    model::{destination::DestinationDto, trip::TripDto},
    server::model::destination::DestinationForm,
};

#[derive(Props, Clone, PartialEq)]
pub struct DestinationListProps {
    pub viewer: Viewer,
    pub destinations: Vec<DestinationDto>,
}

#[component]
pub fn DestinationListPage(props: DestinationListProps) -> Element {
    let is_admin = props.viewer.is_admin();

    rsx! {
        Layout {
            title: "Destinations",
            viewer: props.viewer.clone(),
            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h1 { "Destinations" }
                if is_admin {
                    a { class: "btn btn-success", href: "/destinations/create", "New destination" }
                }
            }
            if props.destinations.is_empty() {
                p { class: "text-muted", "No destinations available yet." }
            }
            div {
                class: "row row-cols-1 row-cols-md-3 g-4",
                for destination in props.destinations.iter() {
                    div {
                        key: "{destination.id}",
                        class: "col",
                        div {
                            class: "card h-100",
                            if let Some(image_url) = &destination.image_url {
                                img { class: "card-img-top", src: "{image_url}", alt: "{destination.name}" }
                            }
                            div {
                                class: "card-body",
                                h5 { class: "card-title", "{destination.name}" }
                                h6 { class: "card-subtitle mb-2 text-muted", "{destination.city}, {destination.country}" }
                                p { class: "card-text", "{destination.description}" }
                                a { class: "btn btn-primary", href: "/destinations/{destination.id}", "Details" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DestinationDetailProps {
    pub viewer: Viewer,
    pub destination: DestinationDto,
    /// Trips heading to this destination.
    pub trips: Vec<TripDto>,
}

#[component]
pub fn DestinationDetailPage(props: DestinationDetailProps) -> Element {
    let destination = &props.destination;
    let is_admin = props.viewer.is_admin();

    rsx! {
        Layout {
            title: destination.name.clone(),
            viewer: props.viewer.clone(),
            h1 { "{destination.name}" }
            p { class: "text-muted", "{destination.city}, {destination.country}" }
            if let Some(image_url) = &destination.image_url {
                img { class: "img-fluid rounded mb-3", src: "{image_url}", alt: "{destination.name}" }
            }
            p { "{destination.description}" }
            h2 { class: "h4 mt-4", "Trips" }
            if props.trips.is_empty() {
                p { class: "text-muted", "No trips to this destination are scheduled." }
            }
            ul {
                class: "list-group mb-4",
                for trip in props.trips.iter() {
                    li {
                        key: "{trip.id}",
                        class: "list-group-item d-flex justify-content-between",
                        a { href: "/trips/{trip.id}", "{trip.name}" }
                        span { {format_date(&trip.start_date)} " · " {format_price(trip.price)} }
                    }
                }
            }
            div {
                class: "d-flex gap-2",
                a { class: "btn btn-outline-secondary", href: "/destinations", "Back to list" }
                if is_admin {
                    a { class: "btn btn-outline-primary", href: "/destinations/{destination.id}/edit", "Edit" }
                    form {
                        method: "post",
                        action: "/destinations/{destination.id}/delete",
                        button { class: "btn btn-outline-danger", r#type: "submit", "Delete" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DestinationFormProps {
    pub viewer: Viewer,
    pub heading: String,
    /// URL the form posts to.
    pub action: String,
    pub form: DestinationForm,
    pub error: String,
}

#[component]
pub fn DestinationFormPage(props: DestinationFormProps) -> Element {
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
                    class: "mb-3",
                    label { class: "form-label", "Name" }
                    input { class: "form-control", name: "name", value: "{values.name}", required: true }
                }
                div {
                    class: "row",
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "City" }
                        input { class: "form-control", name: "city", value: "{values.city}" }
                    }
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "Country" }
                        input { class: "form-control", name: "country", value: "{values.country}", required: true }
                    }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Description" }
                    textarea { class: "form-control", name: "description", rows: "4", "{values.description}" }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Image URL" }
                    input { class: "form-control", r#type: "url", name: "image_url", value: "{values.image_url}" }
                }
                button { class: "btn btn-primary me-2", r#type: "submit", "Save" }
                a { class: "btn btn-outline-secondary", href: "/destinations", "Cancel" }
            }
        }
    }
}

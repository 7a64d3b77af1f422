use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Layout},
        route::{format_date, format_price},
        viewer::Viewer,
    },
    model::{destination::DestinationDto, trip::TripDto},
    server::model::trip::TripForm,
};

#[derive(Props, Clone, PartialEq)]
pub struct TripListProps {
    pub viewer: Viewer,
    pub trips: Vec<TripDto>,
}

#[component]
pub fn TripListPage(props: TripListProps) -> Element {
    let is_admin = props.viewer.is_admin();

    rsx! {
        Layout {
            title: "Trips",
            viewer: props.viewer.clone(),
            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h1 { "Trips" }
                if is_admin {
                    a { class: "btn btn-success", href: "/trips/create", "New trip" }
                }
            }
            if props.trips.is_empty() {
                p { class: "text-muted", "No trips are scheduled." }
            } else {
                table {
                    class: "table table-striped align-middle",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Destination" }
                            th { "Dates" }
                            th { "Price" }
                            th { "Spots left" }
                            th {}
                        }
                    }
                    tbody {
                        for trip in props.trips.iter() {
                            tr {
                                key: "{trip.id}",
                                td { "{trip.name}" }
                                td { {trip.destination_name.clone().unwrap_or_default()} }
                                td { {format_date(&trip.start_date)} " – " {format_date(&trip.end_date)} }
                                td { {format_price(trip.price)} }
                                td { "{trip.available_spots} / {trip.capacity}" }
                                td { a { class: "btn btn-sm btn-primary", href: "/trips/{trip.id}", "Details" } }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TripDetailProps {
    pub viewer: Viewer,
    pub trip: TripDto,
    /// Error from a failed registration attempt, empty otherwise.
    pub error: String,
}

#[component]
pub fn TripDetailPage(props: TripDetailProps) -> Element {
    let trip = &props.trip;
    let is_admin = props.viewer.is_admin();
    let signed_in = props.viewer.is_signed_in();
    let sold_out = trip.available_spots <= 0;

    rsx! {
        Layout {
            title: trip.name.clone(),
            viewer: props.viewer.clone(),
            h1 { "{trip.name}" }
            if let Some(destination_name) = &trip.destination_name {
                p {
                    class: "text-muted",
                    a { href: "/destinations/{trip.destination_id}", "{destination_name}" }
                }
            }
            if let Some(image_url) = &trip.image_url {
                img { class: "img-fluid rounded mb-3", src: "{image_url}", alt: "{trip.name}" }
            }
            p { "{trip.description}" }
            dl {
                class: "row",
                dt { class: "col-sm-3", "Dates" }
                dd { class: "col-sm-9", {format_date(&trip.start_date)} " – " {format_date(&trip.end_date)} " ({trip.duration_days()} days)" }
                dt { class: "col-sm-3", "Price per person" }
                dd { class: "col-sm-9", {format_price(trip.price)} }
                dt { class: "col-sm-3", "Spots left" }
                dd { class: "col-sm-9", "{trip.available_spots} of {trip.capacity}" }
            }
            ErrorAlert { message: props.error.clone() }
            if sold_out {
                div { class: "alert alert-warning", "This trip is fully booked." }
            } else if signed_in {
                form {
                    method: "post",
                    action: "/trips/{trip.id}/register",
                    class: "row g-2 align-items-end mb-4",
                    div {
                        class: "col-auto",
                        label { class: "form-label", "Participants" }
                        input { class: "form-control", r#type: "number", name: "number_of_participants", min: "1", max: "{trip.available_spots}", value: "1" }
                    }
                    div {
                        class: "col-auto",
                        button { class: "btn btn-success", r#type: "submit", "Register for this trip" }
                    }
                }
            } else {
                p {
                    a { href: "/login", "Login" }
                    " to register for this trip."
                }
            }
            div {
                class: "d-flex gap-2",
                a { class: "btn btn-outline-secondary", href: "/trips", "Back to list" }
                if is_admin {
                    a { class: "btn btn-outline-primary", href: "/trips/{trip.id}/edit", "Edit" }
                    form {
                        method: "post",
                        action: "/trips/{trip.id}/delete",
                        button { class: "btn btn-outline-danger", r#type: "submit", "Delete" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TripFormProps {
    pub viewer: Viewer,
    pub heading: String,
    pub action: String,
    pub form: TripForm,
    /// Options for the destination select.
    pub destinations: Vec<DestinationDto>,
    pub error: String,
}

#[component]
pub fn TripFormPage(props: TripFormProps) -> Element {
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
                    class: "mb-3",
                    label { class: "form-label", "Destination" }
                    select {
                        class: "form-select",
                        name: "destination_id",
                        for destination in props.destinations.iter() {
                            option {
                                key: "{destination.id}",
                                value: "{destination.id}",
                                selected: destination.id.to_string() == values.destination_id,
                                "{destination.name}"
                            }
                        }
                    }
                }
                div {
                    class: "row",
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "Start date" }
                        input { class: "form-control", r#type: "date", name: "start_date", value: "{values.start_date}", required: true }
                    }
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "End date" }
                        input { class: "form-control", r#type: "date", name: "end_date", value: "{values.end_date}", required: true }
                    }
                }
                div {
                    class: "row",
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "Price" }
                        input { class: "form-control", r#type: "number", step: "0.01", min: "0", name: "price", value: "{values.price}", required: true }
                    }
                    div {
                        class: "col mb-3",
                        label { class: "form-label", "Capacity" }
                        input { class: "form-control", r#type: "number", min: "1", name: "capacity", value: "{values.capacity}", required: true }
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
                a { class: "btn btn-outline-secondary", href: "/trips", "Cancel" }
            }
        }
    }
}

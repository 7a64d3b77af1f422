use dioxus::prelude::*;

use crate::{
    client::{
        component::Layout,
        route::{format_date, format_price},
        viewer::Viewer,
    },
    model::trip_registration::TripRegistrationDto,
};

#[derive(Props, Clone, PartialEq)]
pub struct RegistrationListProps {
    pub viewer: Viewer,
    pub registrations: Vec<TripRegistrationDto>,
}

#[component]
pub fn RegistrationListPage(props: RegistrationListProps) -> Element {
    rsx! {
        Layout {
            title: "My registrations",
            viewer: props.viewer.clone(),
            h1 { class: "mb-4", "My registrations" }
            if props.registrations.is_empty() {
                p {
                    class: "text-muted",
                    "You have not registered for any trips yet. "
                    a { href: "/trips", "Browse trips" }
                }
            } else {
                table {
                    class: "table align-middle",
                    thead {
                        tr {
                            th { "Trip" }
                            th { "Registered" }
                            th { "Participants" }
                            th { "Total" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for registration in props.registrations.iter() {
                            tr {
                                key: "{registration.id}",
                                td {
                                    a {
                                        href: "/trips/{registration.trip_id}",
                                        {registration.trip_name.clone().unwrap_or_else(|| format!("Trip #{}", registration.trip_id))}
                                    }
                                }
                                td { {format_date(&registration.registration_date)} }
                                td { "{registration.number_of_participants}" }
                                td { {format_price(registration.total_price)} }
                                td { span { class: "badge bg-info text-dark", "{registration.status}" } }
                                td {
                                    form {
                                        method: "post",
                                        action: "/registrations/{registration.id}/cancel",
                                        button { class: "btn btn-sm btn-outline-danger", r#type: "submit", "Cancel" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

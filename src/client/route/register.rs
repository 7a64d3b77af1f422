use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Layout},
        viewer::Viewer,
    },
    server::model::auth::RegisterForm,
};

#[derive(Props, Clone, PartialEq)]
pub struct RegisterPageProps {
    pub form: RegisterForm,
    pub error: String,
}

#[component]
pub fn RegisterPage(props: RegisterPageProps) -> Element {
    let values = &props.form;

    rsx! {
        Layout {
            title: "Register",
            viewer: Viewer::Anonymous,
            div {
                class: "row justify-content-center",
                div {
                    class: "col-md-6",
                    h1 { class: "mb-4", "Create an account" }
                    ErrorAlert { message: props.error.clone() }
                    form {
                        method: "post",
                        action: "/register",
                        div {
                            class: "row",
                            div {
                                class: "col mb-3",
                                label { class: "form-label", "First name" }
                                input { class: "form-control", name: "first_name", value: "{values.first_name}" }
                            }
                            div {
                                class: "col mb-3",
                                label { class: "form-label", "Last name" }
                                input { class: "form-control", name: "last_name", value: "{values.last_name}" }
                            }
                        }
                        div {
                            class: "mb-3",
                            label { class: "form-label", "Username" }
                            input { class: "form-control", name: "username", value: "{values.username}", required: true }
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
                            label { class: "form-label", "Address" }
                            input { class: "form-control", name: "address", value: "{values.address}" }
                        }
                        div {
                            class: "row",
                            div {
                                class: "col mb-3",
                                label { class: "form-label", "Password" }
                                input { class: "form-control", r#type: "password", name: "password", required: true }
                            }
                            div {
                                class: "col mb-3",
                                label { class: "form-label", "Confirm password" }
                                input { class: "form-control", r#type: "password", name: "confirm_password", required: true }
                            }
                        }
                        button { class: "btn btn-primary w-100", r#type: "submit", "Register" }
                    }
                }
            }
        }
    }
}

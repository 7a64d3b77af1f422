use dioxus::prelude::*;

use crate::client::{
    component::{ErrorAlert, Layout},
    viewer::Viewer,
};

#[derive(Props, Clone, PartialEq)]
pub struct LoginPageProps {
    pub username: String,
    pub error: String,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    rsx! {
        Layout {
            title: "Login",
            viewer: Viewer::Anonymous,
            div {
                class: "row justify-content-center",
                div {
                    class: "col-md-5",
                    h1 { class: "mb-4", "Login" }
                    ErrorAlert { message: props.error.clone() }
                    form {
                        method: "post",
                        action: "/login",
                        div {
                            class: "mb-3",
                            label { class: "form-label", "Username" }
                            input { class: "form-control", r#type: "text", name: "username", value: "{props.username}", required: true }
                        }
                        div {
                            class: "mb-3",
                            label { class: "form-label", "Password" }
                            input { class: "form-control", r#type: "password", name: "password", required: true }
                        }
                        button { class: "btn btn-primary w-100", r#type: "submit", "Login" }
                    }
                    p {
                        class: "mt-3 text-center",
                        "No account yet? "
                        a { href: "/register", "Register" }
                    }
                }
            }
        }
    }
}

//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so page
//! handlers can use `?` freely. Error responses are rendered as HTML error pages.

pub mod api;
pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    client::{
        render::render_page,
        route::error::{ErrorPage, ErrorPageProps},
    },
    server::error::{api::ApiError, auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` and `ApiError` handle their own response mapping, while
/// generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` (redirect to login).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Backend API error.
    ///
    /// Delegates to `ApiError::into_response()` for status-specific pages.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failure building the backend HTTP client.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr` and `ApiErr`, delegated to their own `into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ApiErr(err) => err.into_response(),
            Self::NotFound(msg) => error_page(StatusCode::NOT_FOUND, &msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and renders a generic error page to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Renders the shared error page with the given status code.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let page = render_page(
        ErrorPage,
        ErrorPageProps {
            status: status.as_u16(),
            message: message.to_string(),
        },
    );

    (status, page).into_response()
}

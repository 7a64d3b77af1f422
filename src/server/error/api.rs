use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::error::{error_page, InternalServerError};

/// Failure talking to the backend API.
///
/// The `Display` text of every variant is human readable and is what pages show when a
/// backend call fails.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request path could not be joined onto the configured backend base URL.
    #[error("Invalid backend URL for path '{path}': {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, timeout or other transport failure before a response arrived.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status code.
    ///
    /// `message` is extracted from the backend's error body where possible.
    #[error("{message} (HTTP {status} from {endpoint})")]
    Status {
        endpoint: String,
        status: StatusCode,
        message: String,
    },

    /// Response body did not match the expected JSON shape.
    #[error("Failed to parse response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Status code returned by the backend, if the failure was a status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing next to a form, without endpoint details.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Converts backend failures into HTTP responses.
///
/// - 401 from the backend → redirect to `/login` (token missing or expired)
/// - 403 → 403 Forbidden page
/// - 404 → 404 Not Found page
/// - Anything else → 500 Internal Server Error page, details logged
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.status() {
            Some(StatusCode::UNAUTHORIZED) => Redirect::to("/login").into_response(),
            Some(StatusCode::FORBIDDEN) => error_page(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
            Some(StatusCode::NOT_FOUND) => error_page(
                StatusCode::NOT_FOUND,
                "The requested item could not be found.",
            ),
            _ => InternalServerError(self).into_response(),
        }
    }
}

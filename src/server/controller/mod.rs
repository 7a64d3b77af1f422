//! HTTP handlers, one module per area of the site.
//!
//! Handlers read the visitor from the session, call the service layer with the visitor's
//! bearer token, and render a page or redirect. Errors bubble up as `AppError`, which
//! renders the matching error page.

pub mod api_test;
pub mod auth;
pub mod destination;
pub mod guide;
pub mod home;
pub mod registration;
pub mod trip;

use axum::http::StatusCode;
use tower_sessions::Session;

use crate::{
    client::viewer::Viewer,
    server::{
        error::{api::ApiError, AppError},
        middleware::session::{AuthSession, SessionUser},
    },
};

/// Whoever is making the current request, signed in or not.
pub(crate) struct Visitor {
    user: Option<SessionUser>,
}

impl Visitor {
    /// Reads the visitor's credentials from the session.
    pub async fn load(session: &Session) -> Result<Self, AppError> {
        let user = AuthSession::new(session).get_user().await?;

        Ok(Self { user })
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_user(self.user.as_ref().map(|user| &user.user))
    }

    /// Bearer token to forward to the backend, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.token.as_str())
    }
}

impl From<SessionUser> for Visitor {
    /// Visitor for a user already read from the session, e.g. by `AuthGuard`.
    fn from(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }
}

/// Turns a backend failure on a form submission into the message shown above the form.
///
/// A 401 is not shown inline: it propagates so the visitor is sent to the login page.
pub(crate) fn submission_error(err: ApiError) -> Result<String, AppError> {
    if err.status() == Some(StatusCode::UNAUTHORIZED) {
        return Err(err.into());
    }

    tracing::warn!(error = %err, "Backend rejected form submission");

    Ok(err.user_message())
}

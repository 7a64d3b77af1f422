use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Page requires a signed-in user but the session holds no credentials.
    ///
    /// Results in a redirect to the login page rather than an error page.
    #[error("User is not signed in")]
    NotAuthenticated,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` → 303 See Other to `/login`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => Redirect::to("/login").into_response(),
        }
    }
}

use crate::server::{error::AppError, service::auth::AuthService};

/// State behind the logout confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutModel {
    /// Whether this request actually ended an authenticated session.
    pub signed_out: bool,
}

impl LogoutModel {
    /// Logs the user out if the session is authenticated.
    ///
    /// Calling this on an already signed-out session is a no-op and still yields a page
    /// to render. A failing `logout()` is not recovered here so the error page is shown
    /// instead of a false confirmation.
    pub async fn on_get(auth: &dyn AuthService) -> Result<Self, AppError> {
        if !auth.is_authenticated().await? {
            return Ok(Self { signed_out: false });
        }

        auth.logout().await?;
        tracing::info!("User logged out");

        Ok(Self { signed_out: true })
    }
}

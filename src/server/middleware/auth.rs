use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, SessionUser},
};

/// Guard for pages that only make sense for a signed-in user.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the signed-in user or `AuthError::NotAuthenticated`, which renders
    /// as a redirect to the login page.
    pub async fn require(&self) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        Ok(user)
    }
}

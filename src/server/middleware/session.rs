//! Type-safe session management wrapper.
//!
//! The only state this application keeps per browser session is the signed-in user and
//! the bearer token the backend issued for them. `AuthSession` owns the session key and
//! the (de)serialization of that state so handlers never touch raw keys.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::{auth::AuthResponseDto, user::UserDto},
    server::error::AppError,
};

const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication state stored in the session after login or registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUser {
    /// Opaque bearer token issued by the backend.
    pub token: String,
    pub user: UserDto,
}

impl From<AuthResponseDto> for SessionUser {
    fn from(response: AuthResponseDto) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Authentication session management.
///
/// Handles storing, reading and clearing the signed-in user's credentials.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user and their token in the session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused
    /// to ride the authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - Credentials stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the signed-in user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.session.get::<SessionUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the token together with anything else stored.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

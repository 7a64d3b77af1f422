//! Authentication against the backend and session-held credentials.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::{
    model::auth::{AuthResponseDto, LoginDto, RegisterDto},
    server::{
        backend::BackendClient,
        error::AppError,
        middleware::session::{AuthSession, SessionUser},
    },
};

const LOGIN_PATH: &str = "api/auth/login";
const REGISTER_PATH: &str = "api/auth/register";

/// Session-backed authentication operations used by page models.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Whether the current session holds credentials.
    async fn is_authenticated(&self) -> Result<bool, AppError>;

    /// Drops the session's credentials.
    async fn logout(&self) -> Result<(), AppError>;
}

/// `AuthService` over the request's tower-sessions session.
///
/// Also performs login and registration against the backend, storing the returned token
/// and user in the session on success.
pub struct SessionAuthService<'a> {
    backend: &'a BackendClient,
    session: AuthSession<'a>,
}

impl<'a> SessionAuthService<'a> {
    /// # Arguments
    /// - `backend` - Shared backend API client
    /// - `session` - Session of the current request
    pub fn new(backend: &'a BackendClient, session: &'a Session) -> Self {
        Self {
            backend,
            session: AuthSession::new(session),
        }
    }

    /// Signs the user in with the backend and stores the issued token.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Credentials now stored in the session
    /// - `Err(AppError::ApiErr(_))` - Backend rejected the credentials or was unreachable
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn login(&self, credentials: &LoginDto) -> Result<SessionUser, AppError> {
        let response: AuthResponseDto = self.backend.post(LOGIN_PATH, credentials, None).await?;
        self.store(response).await
    }

    /// Registers a new account with the backend and signs it in.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Account created and credentials stored in the session
    /// - `Err(AppError::ApiErr(_))` - Backend rejected the registration (e.g. username taken)
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn register(&self, registration: &RegisterDto) -> Result<SessionUser, AppError> {
        let response: AuthResponseDto = self
            .backend
            .post(REGISTER_PATH, registration, None)
            .await?;
        self.store(response).await
    }

    async fn store(&self, response: AuthResponseDto) -> Result<SessionUser, AppError> {
        let user = SessionUser::from(response);
        self.session.set_user(user.clone()).await?;

        tracing::info!(username = %user.user.username, "User signed in");

        Ok(user)
    }
}

#[async_trait]
impl AuthService for SessionAuthService<'_> {
    async fn is_authenticated(&self) -> Result<bool, AppError> {
        self.session.is_authenticated().await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.session.clear().await;
        Ok(())
    }
}

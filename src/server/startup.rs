use std::time::Duration;

use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{backend::BackendClient, config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs this crate and request traces at info.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tripboard=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Builds the HTTP client used for all backend API calls.
///
/// Redirects are disabled so a misbehaving backend cannot bounce requests (and the
/// bearer token attached to them) to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with the configured request timeout
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.api_timeout_secs))
        .build()?;

    Ok(client)
}

/// Creates the backend API client from configuration.
pub fn setup_backend_client(config: &Config) -> Result<BackendClient, AppError> {
    let http = setup_reqwest_client(config)?;

    Ok(BackendClient::new(http, config.api_base_url.clone()))
}

/// Creates the session layer holding authentication state.
///
/// Sessions live in memory and expire after the configured idle period. The cookie is
/// HTTP-only and strict same-site; `Secure` follows configuration so plain-HTTP local
/// development keeps working.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    session_layer(config.session_idle_minutes, config.session_secure_cookie)
}

pub(crate) fn session_layer(idle_minutes: i64, secure: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name("tripboard.session")
        .with_http_only(true)
        .with_same_site(SameSite::Strict)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(idle_minutes)))
}

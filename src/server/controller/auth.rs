use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::{
            login::{LoginPage, LoginPageProps},
            logout::{LogoutPage, LogoutPageProps},
            register::{RegisterPage, RegisterPageProps},
        },
    },
    model::auth::LoginDto,
    server::{
        error::AppError, model::auth::RegisterForm, page::logout::LogoutModel,
        service::auth::SessionAuthService, state::AppState,
    },
};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Renders the login form.
pub async fn login_page() -> impl IntoResponse {
    render_login(String::new(), String::new())
}

/// Signs the visitor in with the backend.
///
/// # Returns
/// - `303 See Other` to `/` - Credentials accepted and stored in the session
/// - `200 OK` - Login form re-rendered with an error when the backend rejects the
///   credentials (400 or 401)
/// - Error page - Backend unreachable or failing otherwise
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(credentials): Form<LoginDto>,
) -> Result<Response, AppError> {
    let service = SessionAuthService::new(&state.backend, &session);

    match service.login(&credentials).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(AppError::ApiErr(err))
            if matches!(
                err.status(),
                Some(StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED)
            ) =>
        {
            tracing::info!(username = %credentials.username, "Login rejected by backend");
            Ok(render_login(credentials.username, INVALID_CREDENTIALS.to_string()).into_response())
        }
        Err(err) => Err(err),
    }
}

fn render_login(username: String, error: String) -> impl IntoResponse {
    render_page(LoginPage, LoginPageProps { username, error })
}

/// Renders the empty registration form.
pub async fn register_page() -> impl IntoResponse {
    render_page(
        RegisterPage,
        RegisterPageProps {
            form: RegisterForm::default(),
            error: String::new(),
        },
    )
}

/// Creates an account with the backend and signs it in.
///
/// Local validation (email shape, password length, matching confirmation) and backend
/// rejections both re-render the form with the entered values, minus the passwords.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(error) => return Ok(render_register(&form, error)),
    };

    let service = SessionAuthService::new(&state.backend, &session);

    match service.register(&registration).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(AppError::ApiErr(err)) => {
            tracing::info!(username = %form.username, error = %err, "Registration rejected by backend");
            Ok(render_register(&form, err.user_message()))
        }
        Err(err) => Err(err),
    }
}

fn render_register(form: &RegisterForm, error: String) -> Response {
    render_page(
        RegisterPage,
        RegisterPageProps {
            form: form.without_passwords(),
            error,
        },
    )
    .into_response()
}

/// Ends the session and shows the confirmation page.
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionAuthService::new(&state.backend, &session);
    let model = LogoutModel::on_get(&service).await?;

    Ok(render_page(
        LogoutPage,
        LogoutPageProps {
            signed_out: model.signed_out,
        },
    ))
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::registration::{RegistrationListPage, RegistrationListProps},
    },
    server::{
        controller::Visitor,
        error::AppError,
        middleware::auth::AuthGuard,
        service::trip_registration::{TripRegistrationApi, TripRegistrationService},
        state::AppState,
    },
};

/// Registrations visible to the signed-in user.
///
/// The backend decides which registrations a token may see; admins get all of them.
///
/// # Returns
/// - `200 OK` - Registration list
/// - `303 See Other` to `/login` - Visitor is not signed in
pub async fn list_registrations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::from(AuthGuard::new(&session).require().await?);
    let registrations = TripRegistrationApi::new(&state.backend, visitor.token())
        .get_all_trip_registrations()
        .await?;

    Ok(render_page(
        RegistrationListPage,
        RegistrationListProps {
            viewer: visitor.viewer(),
            registrations,
        },
    ))
}

pub async fn cancel_registration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require().await?;
    TripRegistrationApi::new(&state.backend, Some(&user.token))
        .delete_trip_registration(id)
        .await?;

    tracing::info!(id, username = %user.user.username, "Trip registration cancelled");

    Ok(Redirect::to("/registrations"))
}

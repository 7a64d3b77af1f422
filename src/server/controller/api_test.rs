use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::api_test::{ApiTestPage, ApiTestPageProps},
    },
    server::{
        controller::Visitor,
        error::AppError,
        page::api_test::{ApiTestModel, ApiTestServices},
        service::{
            destination::DestinationApi, guide::GuideApi, trip::TripApi,
            trip_registration::TripRegistrationApi,
        },
        state::AppState,
    },
};

/// Backend diagnostic page.
///
/// Always answers `200 OK`; a failing backend shows up as an error message on the page.
pub async fn api_test(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let token = visitor.token();

    let destinations = DestinationApi::new(&state.backend, token);
    let trips = TripApi::new(&state.backend, token);
    let guides = GuideApi::new(&state.backend, token);
    let trip_registrations = TripRegistrationApi::new(&state.backend, token);

    let model = ApiTestModel::on_get(ApiTestServices {
        destinations: &destinations,
        trips: &trips,
        guides: &guides,
        trip_registrations: &trip_registrations,
    })
    .await;

    Ok(render_page(
        ApiTestPage,
        ApiTestPageProps {
            viewer: visitor.viewer(),
            model,
        },
    ))
}

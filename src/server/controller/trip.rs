use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::trip::{
            TripDetailPage, TripDetailProps, TripFormPage, TripFormProps, TripListPage,
            TripListProps,
        },
    },
    model::trip::TripDto,
    server::{
        controller::{submission_error, Visitor},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{trip::TripForm, trip_registration::TripRegistrationForm},
        service::{
            destination::{DestinationApi, DestinationService},
            trip::{TripApi, TripService},
            trip_registration::{TripRegistrationApi, TripRegistrationService},
        },
        state::AppState,
    },
};

pub async fn list_trips(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let trips = TripApi::new(&state.backend, visitor.token())
        .get_all_trips()
        .await?;

    Ok(render_page(
        TripListPage,
        TripListProps {
            viewer: visitor.viewer(),
            trips,
        },
    ))
}

pub async fn trip_details(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let trip = TripApi::new(&state.backend, visitor.token())
        .get_trip(id)
        .await?;

    Ok(render_details(&visitor, trip, String::new()))
}

/// Registers the signed-in visitor for a trip.
///
/// # Returns
/// - `303 See Other` to `/registrations` - Registration created
/// - `303 See Other` to `/login` - Visitor is not signed in
/// - `200 OK` - Trip page re-rendered with the reason the registration failed
pub async fn register_for_trip(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<TripRegistrationForm>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&session).require().await?;
    let username = user.user.username.clone();
    let visitor = Visitor::from(user);

    let registration = match form.validate(id) {
        Ok(registration) => registration,
        Err(error) => return reload_details(&state, &visitor, id, error).await,
    };

    let service = TripRegistrationApi::new(&state.backend, visitor.token());
    if let Err(err) = service.create_trip_registration(&registration).await {
        let error = submission_error(err)?;
        return reload_details(&state, &visitor, id, error).await;
    }

    tracing::info!(
        trip_id = id,
        username = %username,
        participants = registration.number_of_participants,
        "Trip registration created"
    );

    Ok(Redirect::to("/registrations").into_response())
}

async fn reload_details(
    state: &AppState,
    visitor: &Visitor,
    id: i32,
    error: String,
) -> Result<Response, AppError> {
    let trip = TripApi::new(&state.backend, visitor.token())
        .get_trip(id)
        .await?;

    Ok(render_details(visitor, trip, error))
}

fn render_details(visitor: &Visitor, trip: TripDto, error: String) -> Response {
    render_page(
        TripDetailPage,
        TripDetailProps {
            viewer: visitor.viewer(),
            trip,
            error,
        },
    )
    .into_response()
}

pub async fn create_trip_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    render_form(&state, &visitor, None, TripForm::default(), String::new()).await
}

/// Creates a trip and returns to the list.
///
/// Dates are checked locally before the backend is called.
pub async fn create_trip(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return render_form(&state, &visitor, None, form, error).await,
    };

    let service = TripApi::new(&state.backend, visitor.token());
    if let Err(err) = service.create_trip(&request).await {
        let error = submission_error(err)?;
        return render_form(&state, &visitor, None, form, error).await;
    }

    tracing::info!(name = %request.name, "Trip created");

    Ok(Redirect::to("/trips").into_response())
}

pub async fn edit_trip_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;
    let trip = TripApi::new(&state.backend, visitor.token())
        .get_trip(id)
        .await?;

    render_form(
        &state,
        &visitor,
        Some(id),
        TripForm::from(trip),
        String::new(),
    )
    .await
}

pub async fn edit_trip(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return render_form(&state, &visitor, Some(id), form, error).await,
    };

    let service = TripApi::new(&state.backend, visitor.token());
    if let Err(err) = service.update_trip(id, &request).await {
        let error = submission_error(err)?;
        return render_form(&state, &visitor, Some(id), form, error).await;
    }

    tracing::info!(id, "Trip updated");

    Ok(Redirect::to(&format!("/trips/{}", id)).into_response())
}

pub async fn delete_trip(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    TripApi::new(&state.backend, visitor.token())
        .delete_trip(id)
        .await?;

    tracing::info!(id, "Trip deleted");

    Ok(Redirect::to("/trips"))
}

/// Create form when `id` is `None`, edit form otherwise.
///
/// Loads destinations for the destination picker.
async fn render_form(
    state: &AppState,
    visitor: &Visitor,
    id: Option<i32>,
    form: TripForm,
    error: String,
) -> Result<Response, AppError> {
    let destinations = DestinationApi::new(&state.backend, visitor.token())
        .get_all_destinations()
        .await?;

    let (heading, action) = match id {
        Some(id) => ("Edit trip".to_string(), format!("/trips/{}/edit", id)),
        None => ("New trip".to_string(), "/trips/create".to_string()),
    };

    Ok(render_page(
        TripFormPage,
        TripFormProps {
            viewer: visitor.viewer(),
            heading,
            action,
            form,
            destinations,
            error,
        },
    )
    .into_response())
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::destination::{
            DestinationDetailPage, DestinationDetailProps, DestinationFormPage,
            DestinationFormProps, DestinationListPage, DestinationListProps,
        },
    },
    server::{
        controller::{submission_error, Visitor},
        error::AppError,
        model::destination::DestinationForm,
        service::{
            destination::{DestinationApi, DestinationService},
            trip::{TripApi, TripService},
        },
        state::AppState,
    },
};

pub async fn list_destinations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let destinations = DestinationApi::new(&state.backend, visitor.token())
        .get_all_destinations()
        .await?;

    Ok(render_page(
        DestinationListPage,
        DestinationListProps {
            viewer: visitor.viewer(),
            destinations,
        },
    ))
}

/// Destination details together with the trips that go there.
///
/// # Returns
/// - `200 OK` - Details page
/// - `404 Not Found` - Backend has no destination with this id
pub async fn destination_details(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let destination = DestinationApi::new(&state.backend, visitor.token())
        .get_destination(id)
        .await?;
    let trips = TripApi::new(&state.backend, visitor.token())
        .get_all_trips()
        .await?
        .into_iter()
        .filter(|trip| trip.destination_id == id)
        .collect();

    Ok(render_page(
        DestinationDetailPage,
        DestinationDetailProps {
            viewer: visitor.viewer(),
            destination,
            trips,
        },
    ))
}

pub async fn create_destination_page(session: Session) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;

    Ok(render_form(
        &visitor,
        None,
        DestinationForm::default(),
        String::new(),
    ))
}

/// Creates a destination and returns to the list.
///
/// Invalid input and backend rejections re-render the form with a message.
pub async fn create_destination(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DestinationForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return Ok(render_form(&visitor, None, form, error)),
    };

    let service = DestinationApi::new(&state.backend, visitor.token());
    if let Err(err) = service.create_destination(&request).await {
        let error = submission_error(err)?;
        return Ok(render_form(&visitor, None, form, error));
    }

    tracing::info!(name = %request.name, "Destination created");

    Ok(Redirect::to("/destinations").into_response())
}

pub async fn edit_destination_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let destination = DestinationApi::new(&state.backend, visitor.token())
        .get_destination(id)
        .await?;

    Ok(render_form(
        &visitor,
        Some(id),
        DestinationForm::from(destination),
        String::new(),
    ))
}

pub async fn edit_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<DestinationForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return Ok(render_form(&visitor, Some(id), form, error)),
    };

    let service = DestinationApi::new(&state.backend, visitor.token());
    if let Err(err) = service.update_destination(id, &request).await {
        let error = submission_error(err)?;
        return Ok(render_form(&visitor, Some(id), form, error));
    }

    tracing::info!(id, "Destination updated");

    Ok(Redirect::to(&format!("/destinations/{}", id)).into_response())
}

pub async fn delete_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    DestinationApi::new(&state.backend, visitor.token())
        .delete_destination(id)
        .await?;

    tracing::info!(id, "Destination deleted");

    Ok(Redirect::to("/destinations"))
}

/// Create form when `id` is `None`, edit form otherwise.
fn render_form(
    visitor: &Visitor,
    id: Option<i32>,
    form: DestinationForm,
    error: String,
) -> Response {
    let (heading, action) = match id {
        Some(id) => ("Edit destination".to_string(), format!("/destinations/{}/edit", id)),
        None => ("New destination".to_string(), "/destinations/create".to_string()),
    };

    render_page(
        DestinationFormPage,
        DestinationFormProps {
            viewer: visitor.viewer(),
            heading,
            action,
            form,
            error,
        },
    )
    .into_response()
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::guide::{
            GuideDetailPage, GuideDetailProps, GuideFormPage, GuideFormProps, GuideListPage,
            GuideListProps,
        },
    },
    server::{
        controller::{submission_error, Visitor},
        error::AppError,
        model::guide::GuideForm,
        service::guide::{GuideApi, GuideService},
        state::AppState,
    },
};

pub async fn list_guides(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let guides = GuideApi::new(&state.backend, visitor.token())
        .get_all_guides()
        .await?;

    Ok(render_page(
        GuideListPage,
        GuideListProps {
            viewer: visitor.viewer(),
            guides,
        },
    ))
}

pub async fn guide_details(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let guide = GuideApi::new(&state.backend, visitor.token())
        .get_guide(id)
        .await?;

    Ok(render_page(
        GuideDetailPage,
        GuideDetailProps {
            viewer: visitor.viewer(),
            guide,
        },
    ))
}

pub async fn create_guide_page(session: Session) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;

    Ok(render_form(&visitor, None, GuideForm::default(), String::new()))
}

pub async fn create_guide(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<GuideForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return Ok(render_form(&visitor, None, form, error)),
    };

    let service = GuideApi::new(&state.backend, visitor.token());
    if let Err(err) = service.create_guide(&request).await {
        let error = submission_error(err)?;
        return Ok(render_form(&visitor, None, form, error));
    }

    tracing::info!(email = %request.email, "Guide created");

    Ok(Redirect::to("/guides").into_response())
}

pub async fn edit_guide_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    let guide = GuideApi::new(&state.backend, visitor.token())
        .get_guide(id)
        .await?;

    Ok(render_form(
        &visitor,
        Some(id),
        GuideForm::from(guide),
        String::new(),
    ))
}

pub async fn edit_guide(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<GuideForm>,
) -> Result<Response, AppError> {
    let visitor = Visitor::load(&session).await?;

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return Ok(render_form(&visitor, Some(id), form, error)),
    };

    let service = GuideApi::new(&state.backend, visitor.token());
    if let Err(err) = service.update_guide(id, &request).await {
        let error = submission_error(err)?;
        return Ok(render_form(&visitor, Some(id), form, error));
    }

    tracing::info!(id, "Guide updated");

    Ok(Redirect::to(&format!("/guides/{}", id)).into_response())
}

pub async fn delete_guide(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;
    GuideApi::new(&state.backend, visitor.token())
        .delete_guide(id)
        .await?;

    tracing::info!(id, "Guide deleted");

    Ok(Redirect::to("/guides"))
}

fn render_form(visitor: &Visitor, id: Option<i32>, form: GuideForm, error: String) -> Response {
    let (heading, action) = match id {
        Some(id) => ("Edit guide".to_string(), format!("/guides/{}/edit", id)),
        None => ("New guide".to_string(), "/guides/create".to_string()),
    };

    render_page(
        GuideFormPage,
        GuideFormProps {
            viewer: visitor.viewer(),
            heading,
            action,
            form,
            error,
        },
    )
    .into_response()
}

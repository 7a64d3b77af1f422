use axum::response::IntoResponse;
use tower_sessions::Session;

use crate::{
    client::{
        render::render_page,
        route::home::{HomePage, HomePageProps},
    },
    server::{controller::Visitor, error::AppError},
};

pub async fn home(session: Session) -> Result<impl IntoResponse, AppError> {
    let visitor = Visitor::load(&session).await?;

    Ok(render_page(
        HomePage,
        HomePageProps {
            viewer: visitor.viewer(),
        },
    ))
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("The page you are looking for does not exist.".to_string())
}

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::registrations::use_cases::register_for_course::command::RegisterForCourse;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::http::reject_body;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterForCourse>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body.map_err(reject_body)?;
    let registration = state.register_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn show(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(id) = id.map_err(|_| ApplicationError::NotFound("Registration not found".into()))?;
    Ok(Json(state.register_handler.get(id).await?))
}

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::http::reject_query;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesParams {
    pub course_id: Option<EntityId>,
}

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(state.store.list_active_courses().await?))
}

pub async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    // A malformed id names no course.
    let Path(id) = id.map_err(|_| ApplicationError::NotFound("Course not found".into()))?;
    match state.store.get_course(id).await? {
        Some(course) => Ok(Json(course)),
        None => Err(ApplicationError::NotFound("Course not found".into())),
    }
}

pub async fn list_schedules(
    State(state): State<AppState>,
    params: Result<Query<ListSchedulesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Query(params) = params.map_err(reject_query)?;
    Ok(Json(state.store.list_active_schedules(params.course_id).await?))
}

pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(state.store.list_active_testimonials().await?))
}

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};

use crate::modules::registrations::use_cases::reconcile_payment::command::{
    ReconcilePayment, ReconcilePaymentBody,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::http::reject_body;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<ReconcilePaymentBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(id) = id.map_err(|_| ApplicationError::NotFound("Registration not found".into()))?;
    let Json(body) = body.map_err(reject_body)?;
    let command = ReconcilePayment::parse(id, body)?;
    Ok(Json(state.reconcile_handler.handle(command).await?))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::inquiries::use_cases::submit_inquiry::command::SubmitInquiry;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::reject_body;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitInquiry>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body.map_err(reject_body)?;
    let inquiry = state.inquiry_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::checkout::command::Checkout;
use crate::modules::registrations::use_cases::process_payment::inbound::http::PaymentResponse;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::reject_body;
use crate::shared::infrastructure::payment_gateway::ChargeOutcome;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub registration: Registration,
    pub payment: PaymentResponse,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Checkout>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body.map_err(reject_body)?;
    let receipt = state.checkout_handler.handle(command, Utc::now()).await?;

    let status = match receipt.payment {
        ChargeOutcome::Approved { .. } => StatusCode::CREATED,
        ChargeOutcome::Declined { .. } => StatusCode::PAYMENT_REQUIRED,
    };
    Ok((
        status,
        Json(CheckoutResponse {
            registration: receipt.registration,
            payment: receipt.payment.into(),
        }),
    ))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::modules::registrations::use_cases::process_payment::command::ProcessPayment;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::reject_body;
use crate::shared::infrastructure::payment_gateway::ChargeOutcome;
use crate::shell::state::AppState;

/// Wire form of a charge outcome. A decline is still a 200 here; callers
/// branch on `success`.
#[derive(Debug, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum PaymentResponse {
    Approved {
        success: bool,
        payment_id: String,
        status: PaymentStatus,
        amount: Decimal,
    },
    Declined {
        success: bool,
        message: String,
    },
}

impl From<ChargeOutcome> for PaymentResponse {
    fn from(outcome: ChargeOutcome) -> Self {
        match outcome {
            ChargeOutcome::Approved {
                payment_id,
                status,
                amount,
            } => PaymentResponse::Approved {
                success: true,
                payment_id,
                status,
                amount,
            },
            ChargeOutcome::Declined { message } => PaymentResponse::Declined {
                success: false,
                message,
            },
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProcessPayment>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body.map_err(reject_body)?;
    let outcome = state.payment_handler.handle(command).await?;
    Ok(Json(PaymentResponse::from(outcome)))
}

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::shared::core::errors::{ApplicationError, FieldError};
use crate::shared::infrastructure::entity_store::EntityStoreError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApplicationError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid request data".into(),
                    errors: Some(fields),
                },
            ),
            ApplicationError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(message))
            }
            ApplicationError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message)),
            ApplicationError::Conflict(message) => (StatusCode::CONFLICT, ErrorBody::new(message)),
            ApplicationError::Store(e @ EntityStoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, ErrorBody::new(e.to_string()))
            }
            ApplicationError::Store(
                e @ (EntityStoreError::IllegalTransition { .. }
                | EntityStoreError::PaymentInFlight { .. }),
            ) => (StatusCode::CONFLICT, ErrorBody::new(e.to_string())),
            ApplicationError::Store(e) => {
                error!(error = %e, "entity store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
            ApplicationError::UnrecordedPayment {
                registration_id,
                payment_id,
                source,
            } => {
                error!(registration_id, %payment_id, error = %source, "approved payment not recorded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(format!(
                        "Payment {payment_id} was taken but could not be recorded"
                    )),
                )
            }
            ApplicationError::Payment(e) => {
                error!(error = %e, "payment gateway failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Payment processing failed"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a body that failed to parse into a 400 naming the problem.
pub fn reject_body(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
}

pub fn reject_query(rejection: QueryRejection) -> ApplicationError {
    ApplicationError::BadRequest(format!("Invalid query: {}", rejection.body_text()))
}

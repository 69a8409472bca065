use serde::Deserialize;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::core::errors::{ApplicationError, FieldError};
use crate::shared::core::primitives::EntityId;

/// PATCH body. Both fields are optional on the wire so that a missing one is
/// reported as a field error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReconcilePaymentBody {
    pub payment_status: Option<String>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePayment {
    pub registration_id: EntityId,
    pub payment_status: PaymentStatus,
    pub payment_id: String,
}

impl ReconcilePayment {
    pub fn parse(
        registration_id: EntityId,
        body: ReconcilePaymentBody,
    ) -> Result<Self, ApplicationError> {
        let mut fields = Vec::new();

        let payment_id = body
            .payment_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        if payment_id.is_none() {
            fields.push(FieldError::new("paymentId", "Payment ID is required"));
        }

        let payment_status = match body.payment_status.as_deref() {
            None | Some("") => {
                fields.push(FieldError::new("paymentStatus", "Payment status is required"));
                None
            }
            Some(raw) => match raw.parse::<PaymentStatus>() {
                Ok(status) => Some(status),
                Err(e) => {
                    fields.push(FieldError::new("paymentStatus", e.to_string()));
                    None
                }
            },
        };

        match (payment_status, payment_id) {
            (Some(payment_status), Some(payment_id)) => Ok(Self {
                registration_id,
                payment_status,
                payment_id,
            }),
            _ => {
                fields.sort_by(|a, b| a.field.cmp(&b.field));
                Err(ApplicationError::Validation(fields))
            }
        }
    }
}

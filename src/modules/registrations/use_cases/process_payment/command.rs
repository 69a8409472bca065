use rust_decimal::Decimal;
use serde::Deserialize;

use crate::shared::core::errors::{ApplicationError, FieldError};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::payment_gateway::CardToken;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayment {
    pub amount: Decimal,
    pub card_token: CardToken,
    #[serde(default)]
    pub registration_id: Option<EntityId>,
}

impl ProcessPayment {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut fields = Vec::new();
        if self.amount <= Decimal::ZERO {
            fields.push(FieldError::new("amount", "Amount must be positive"));
        }
        if self.card_token.0.trim().is_empty() {
            fields.push(FieldError::new("cardToken", "Card token is required"));
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(fields))
        }
    }
}

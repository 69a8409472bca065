// Payment gateway port.
//
// The registration workflow only ever talks to `PaymentGateway`; `stub`
// simulates the external processor so a real one can be dropped in later.

pub mod card;
pub mod stub;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::core::primitives::EntityId;

/// Raw card data as typed by the customer. Never logged. Missing fields
/// deserialize as empty and are caught by `card::validate_card`.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let last_four = &digits[digits.len().saturating_sub(4)..];
        f.debug_struct("CardDetails")
            .field("card_number", &format_args!("****{last_four}"))
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

/// Opaque, single-use stand-in for card data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardToken(pub String);

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRequest {
    pub amount: Decimal,
    pub card_token: CardToken,
    pub registration_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChargeOutcome {
    Approved {
        payment_id: String,
        status: PaymentStatus,
        amount: Decimal,
    },
    Declined {
        message: String,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentGatewayError {
    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn tokenize(&self, card: &CardDetails) -> Result<CardToken, PaymentGatewayError>;
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeOutcome, PaymentGatewayError>;
}

// Simulated payment processor.
//
// Sleeps to model network latency, then approves every charge with a freshly
// minted payment id. Tests can switch it to decline or to fail outright.

use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::core::primitives::to_money;
use crate::shared::infrastructure::payment_gateway::{
    CardDetails, CardToken, ChargeOutcome, ChargeRequest, PaymentGateway, PaymentGatewayError,
};

#[derive(Debug, Clone, Default)]
pub struct StubPaymentGateway {
    tokenize_latency: Duration,
    charge_latency: Duration,
    decline_message: Option<String>,
    is_offline: bool,
}

impl StubPaymentGateway {
    pub fn new(tokenize_latency: Duration, charge_latency: Duration) -> Self {
        Self {
            tokenize_latency,
            charge_latency,
            ..Self::default()
        }
    }

    /// No artificial latency.
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn decline_with(mut self, message: impl Into<String>) -> Self {
        self.decline_message = Some(message.into());
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), PaymentGatewayError> {
        if self.is_offline {
            return Err(PaymentGatewayError::Unavailable(
                "Payment gateway offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn tokenize(&self, _card: &CardDetails) -> Result<CardToken, PaymentGatewayError> {
        self.ensure_online()?;
        tokio::time::sleep(self.tokenize_latency).await;
        Ok(CardToken(format!("tok_{}", Uuid::now_v7().simple())))
    }

    async fn charge(&self, request: ChargeRequest) -> Result<ChargeOutcome, PaymentGatewayError> {
        self.ensure_online()?;
        tokio::time::sleep(self.charge_latency).await;

        if let Some(message) = &self.decline_message {
            debug!(token = %request.card_token, "stub gateway declining charge");
            return Ok(ChargeOutcome::Declined {
                message: message.clone(),
            });
        }

        let payment_id = format!("pay_{}", Uuid::now_v7().simple());
        debug!(%payment_id, amount = %request.amount, "stub gateway approved charge");
        Ok(ChargeOutcome::Approved {
            payment_id,
            status: PaymentStatus::Completed,
            amount: to_money(request.amount),
        })
    }
}

use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::modules::registrations::use_cases::process_payment::command::ProcessPayment;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::{EntityStore, EntityStoreError};
use crate::shared::infrastructure::payment_gateway::{ChargeOutcome, ChargeRequest, PaymentGateway};

pub const TIMED_OUT_MESSAGE: &str = "payment timed out";

pub struct ProcessPaymentHandler<TStore, TGateway>
where
    TStore: EntityStore + 'static,
    TGateway: PaymentGateway + 'static,
{
    store: Arc<TStore>,
    gateway: Arc<TGateway>,
    timeout: Duration,
}

impl<TStore, TGateway> ProcessPaymentHandler<TStore, TGateway>
where
    TStore: EntityStore + 'static,
    TGateway: PaymentGateway + 'static,
{
    pub fn new(store: Arc<TStore>, gateway: Arc<TGateway>, timeout: Duration) -> Self {
        Self {
            store,
            gateway,
            timeout,
        }
    }

    /// Charges the card token and, when the payment is tied to a
    /// registration, writes the outcome back onto it. The registration is
    /// claimed for the whole charge, so a concurrent payment, reconciliation
    /// or sweep is turned away instead of racing it. A charge that outlives
    /// the timeout counts as declined.
    pub async fn handle(
        &self,
        command: ProcessPayment,
    ) -> Result<ChargeOutcome, ApplicationError> {
        command.validate()?;
        let amount = match command.registration_id {
            Some(id) => self.claim_registration(id, &command).await?,
            None => command.amount,
        };

        let registration_id = command.registration_id;
        let request = ChargeRequest {
            amount,
            card_token: command.card_token,
            registration_id,
        };

        let outcome = match tokio::time::timeout(self.timeout, self.gateway.charge(request)).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                if let Some(id) = registration_id {
                    self.fail_quietly(id).await;
                }
                return Err(e.into());
            }
            Err(_) => {
                warn!(
                    ?registration_id,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "charge timed out"
                );
                ChargeOutcome::Declined {
                    message: TIMED_OUT_MESSAGE.into(),
                }
            }
        };

        if let Some(id) = registration_id {
            self.settle(id, &outcome).await?;
        }

        Ok(outcome)
    }

    async fn claim_registration(
        &self,
        id: EntityId,
        command: &ProcessPayment,
    ) -> Result<Decimal, ApplicationError> {
        let registration = self
            .store
            .get_registration(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Registration not found".into()))?;
        if registration.payment_status != PaymentStatus::Pending {
            return Err(ApplicationError::Conflict(format!(
                "Registration is already {}",
                registration.payment_status
            )));
        }
        if command.amount != registration.total_amount {
            return Err(ApplicationError::BadRequest(
                "Payment amount does not match the registration total".into(),
            ));
        }
        match self.store.claim_payment(id).await {
            Ok(claimed) => Ok(claimed.total_amount),
            Err(EntityStoreError::PaymentInFlight { .. }) => Err(ApplicationError::Conflict(
                "A payment for this registration is already in progress".into(),
            )),
            Err(EntityStoreError::IllegalTransition { from, .. }) => Err(
                ApplicationError::Conflict(format!("Registration is already {from}")),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn settle(&self, id: EntityId, outcome: &ChargeOutcome) -> Result<(), ApplicationError> {
        match outcome {
            ChargeOutcome::Approved {
                payment_id, status, ..
            } => {
                if let Err(source) = self
                    .store
                    .settle_payment(id, *status, Some(payment_id.clone()))
                    .await
                {
                    error!(
                        registration_id = id,
                        %payment_id,
                        error = %source,
                        "approved payment could not be recorded"
                    );
                    return Err(ApplicationError::UnrecordedPayment {
                        registration_id: id,
                        payment_id: payment_id.clone(),
                        source,
                    });
                }
                info!(registration_id = id, %payment_id, "payment approved");
            }
            ChargeOutcome::Declined { message } => {
                self.store
                    .settle_payment(id, PaymentStatus::Failed, None)
                    .await?;
                info!(registration_id = id, %message, "payment declined");
            }
        }
        Ok(())
    }

    async fn fail_quietly(&self, id: EntityId) {
        if let Err(e) = self
            .store
            .settle_payment(id, PaymentStatus::Failed, None)
            .await
        {
            error!(registration_id = id, error = %e, "could not mark registration failed");
        }
    }
}

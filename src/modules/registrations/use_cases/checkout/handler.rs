// Full registration sequence in one call:
//
// validate form + card -> pending registration -> tokenize -> charge -> reconcile
//
// The registration and the charge commit separately. If the process dies in
// between, the sweep fails the orphaned pending row later.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::checkout::command::Checkout;
use crate::modules::registrations::use_cases::process_payment::command::ProcessPayment;
use crate::modules::registrations::use_cases::process_payment::handler::ProcessPaymentHandler;
use crate::modules::registrations::use_cases::register_for_course::handler::RegisterForCourseHandler;
use crate::shared::core::errors::{ApplicationError, card_fields, validation_fields};
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::payment_gateway::card::validate_card;
use crate::shared::infrastructure::payment_gateway::{ChargeOutcome, PaymentGateway};

#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub registration: Registration,
    pub payment: ChargeOutcome,
}

pub struct CheckoutHandler<TStore, TGateway>
where
    TStore: EntityStore + 'static,
    TGateway: PaymentGateway + 'static,
{
    store: Arc<TStore>,
    gateway: Arc<TGateway>,
    register: Arc<RegisterForCourseHandler<TStore>>,
    payments: Arc<ProcessPaymentHandler<TStore, TGateway>>,
}

impl<TStore, TGateway> CheckoutHandler<TStore, TGateway>
where
    TStore: EntityStore + 'static,
    TGateway: PaymentGateway + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        gateway: Arc<TGateway>,
        register: Arc<RegisterForCourseHandler<TStore>>,
        payments: Arc<ProcessPaymentHandler<TStore, TGateway>>,
    ) -> Self {
        Self {
            store,
            gateway,
            register,
            payments,
        }
    }

    pub async fn handle(
        &self,
        command: Checkout,
        now: DateTime<Utc>,
    ) -> Result<CheckoutReceipt, ApplicationError> {
        let mut fields = Vec::new();
        if let Err(errors) = command.registration.validate() {
            fields.extend(validation_fields(&errors));
        }
        if let Err(problems) = validate_card(&command.card, now) {
            fields.extend(card_fields(&problems));
        }
        if !fields.is_empty() {
            fields.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(ApplicationError::Validation(fields));
        }

        let registration = self.register.handle(command.registration).await?;

        let card_token = match self.gateway.tokenize(&command.card).await {
            Ok(token) => token,
            Err(e) => {
                if let Err(store_error) = self
                    .store
                    .update_payment_status(registration.id, PaymentStatus::Failed, None)
                    .await
                {
                    error!(
                        registration_id = registration.id,
                        error = %store_error,
                        "could not mark registration failed"
                    );
                }
                return Err(e.into());
            }
        };

        let payment = self
            .payments
            .handle(ProcessPayment {
                amount: registration.total_amount,
                card_token,
                registration_id: Some(registration.id),
            })
            .await?;

        let registration = self
            .store
            .get_registration(registration.id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Registration not found".into()))?;
        info!(
            registration_id = registration.id,
            payment_status = %registration.payment_status,
            "checkout finished"
        );

        Ok(CheckoutReceipt {
            registration,
            payment,
        })
    }
}

use std::sync::Arc;
use tracing::info;

use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::reconcile_payment::command::ReconcilePayment;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::entity_store::EntityStore;

pub struct ReconcilePaymentHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReconcilePaymentHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: ReconcilePayment) -> Result<Registration, ApplicationError> {
        let registration = self
            .store
            .update_payment_status(
                command.registration_id,
                command.payment_status,
                Some(command.payment_id),
            )
            .await?;
        info!(
            registration_id = registration.id,
            payment_status = %registration.payment_status,
            "payment status reconciled"
        );
        Ok(registration)
    }
}

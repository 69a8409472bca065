use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::{EntityStore, EntityStoreError};

/// Fails registrations left pending longer than `ttl`, e.g. when the client
/// went away between registering and paying. Registrations with a charge in
/// flight are left to that charge.
pub struct SweepAbandonedHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
    ttl: TimeDelta,
}

impl<TStore> SweepAbandonedHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>, ttl: TimeDelta) -> Self {
        Self { store, ttl }
    }

    /// Returns the ids that were moved to `failed`.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<Vec<EntityId>, ApplicationError> {
        let cutoff = now - self.ttl;
        let stale = self
            .store
            .list_registrations_with_status(PaymentStatus::Pending)
            .await?
            .into_iter()
            .filter(|r| r.registration_date < cutoff);

        let mut swept = Vec::new();
        for registration in stale {
            match self
                .store
                .update_payment_status(registration.id, PaymentStatus::Failed, None)
                .await
            {
                Ok(_) => swept.push(registration.id),
                Err(EntityStoreError::IllegalTransition { .. }) => {
                    debug!(registration_id = registration.id, "settled while sweeping; skipped");
                }
                Err(EntityStoreError::PaymentInFlight { .. }) => {
                    debug!(registration_id = registration.id, "charge in flight; skipped");
                }
                Err(e) => return Err(e.into()),
            }
        }

        if !swept.is_empty() {
            info!(count = swept.len(), ?swept, "abandoned registrations failed");
        }
        Ok(swept)
    }
}

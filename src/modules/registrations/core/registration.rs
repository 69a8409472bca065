use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dental_license_number: String,
    pub course_id: EntityId,
    pub schedule_id: Option<EntityId>,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub total_amount: Decimal,
    pub registration_date: DateTime<Utc>,
    pub status: RegistrationStatus,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("payment status cannot change from {from} to {to}")]
pub struct IllegalPaymentTransition {
    pub from: PaymentStatus,
    pub to: PaymentStatus,
}

impl Registration {
    /// Records a payment outcome. Repeating the current terminal outcome with
    /// the same payment id is a no-op; anything else out of a terminal state
    /// is rejected.
    pub fn apply_payment(
        &mut self,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<(), IllegalPaymentTransition> {
        let illegal = IllegalPaymentTransition {
            from: self.payment_status,
            to: status,
        };
        if !self.payment_status.can_transition_to(status) {
            return Err(illegal);
        }
        if self.payment_status.is_terminal() {
            if payment_id.is_some() && payment_id != self.payment_id {
                return Err(illegal);
            }
            return Ok(());
        }
        self.payment_status = status;
        if payment_id.is_some() {
            self.payment_id = payment_id;
        }
        Ok(())
    }
}

/// Registration as handed to the store: everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dental_license_number: String,
    pub course_id: EntityId,
    pub schedule_id: Option<EntityId>,
    pub total_amount: Decimal,
    pub registration_date: DateTime<Utc>,
}

impl NewRegistration {
    pub fn into_registration(self, id: EntityId) -> Registration {
        Registration {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            dental_license_number: self.dental_license_number,
            course_id: self.course_id,
            schedule_id: self.schedule_id,
            payment_status: PaymentStatus::Pending,
            payment_id: None,
            total_amount: self.total_amount,
            registration_date: self.registration_date,
            status: RegistrationStatus::Active,
        }
    }
}

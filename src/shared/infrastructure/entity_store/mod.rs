// Storage port for every entity the backend keeps.
//
// The core codes against this trait only. `in_memory` provides the adapter
// used by the binary and by tests; the data lives for the process lifetime.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::catalog::core::course::{Course, NewCourse};
use crate::modules::catalog::core::schedule::{CourseSchedule, NewCourseSchedule};
use crate::modules::catalog::core::testimonial::{NewTestimonial, Testimonial};
use crate::modules::inquiries::core::inquiry::{Inquiry, NewInquiry};
use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::modules::registrations::core::registration::{NewRegistration, Registration};
use crate::modules::users::core::user::{NewUser, User};
use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Course,
    CourseSchedule,
    Registration,
    Inquiry,
    Testimonial,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::User => "user",
            EntityKind::Course => "course",
            EntityKind::CourseSchedule => "course schedule",
            EntityKind::Registration => "registration",
            EntityKind::Inquiry => "inquiry",
            EntityKind::Testimonial => "testimonial",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityStoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("payment status cannot change from {from} to {to}")]
    IllegalTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },

    #[error("registration {id} has a payment in flight")]
    PaymentInFlight { id: EntityId },

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<User, EntityStoreError>;
    async fn get_user(&self, id: EntityId) -> Result<Option<User>, EntityStoreError>;
    async fn get_user_by_username(&self, username: &str)
    -> Result<Option<User>, EntityStoreError>;

    async fn create_course(&self, input: NewCourse) -> Result<Course, EntityStoreError>;
    async fn get_course(&self, id: EntityId) -> Result<Option<Course>, EntityStoreError>;
    async fn list_active_courses(&self) -> Result<Vec<Course>, EntityStoreError>;

    async fn create_schedule(
        &self,
        input: NewCourseSchedule,
    ) -> Result<CourseSchedule, EntityStoreError>;
    async fn get_schedule(&self, id: EntityId)
    -> Result<Option<CourseSchedule>, EntityStoreError>;
    async fn list_active_schedules(
        &self,
        course_id: Option<EntityId>,
    ) -> Result<Vec<CourseSchedule>, EntityStoreError>;

    async fn create_registration(
        &self,
        input: NewRegistration,
    ) -> Result<Registration, EntityStoreError>;
    async fn get_registration(
        &self,
        id: EntityId,
    ) -> Result<Option<Registration>, EntityStoreError>;
    /// Applies a payment outcome in place. The transition table is enforced
    /// under the same lock as the write. Fails with `PaymentInFlight` while
    /// the registration is claimed by a charge.
    async fn update_payment_status(
        &self,
        id: EntityId,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Registration, EntityStoreError>;
    /// Reserves a pending registration for one charge. A second claim fails
    /// with `PaymentInFlight` until `settle_payment` runs.
    async fn claim_payment(&self, id: EntityId) -> Result<Registration, EntityStoreError>;
    /// Releases the claim and applies the charge outcome. The claim is
    /// released even when the write itself fails.
    async fn settle_payment(
        &self,
        id: EntityId,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Registration, EntityStoreError>;
    async fn list_registrations_with_status(
        &self,
        status: PaymentStatus,
    ) -> Result<Vec<Registration>, EntityStoreError>;

    async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, EntityStoreError>;
    async fn get_inquiry(&self, id: EntityId) -> Result<Option<Inquiry>, EntityStoreError>;
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, EntityStoreError>;

    async fn create_testimonial(
        &self,
        input: NewTestimonial,
    ) -> Result<Testimonial, EntityStoreError>;
    async fn get_testimonial(&self, id: EntityId)
    -> Result<Option<Testimonial>, EntityStoreError>;
    async fn list_active_testimonials(&self) -> Result<Vec<Testimonial>, EntityStoreError>;
}

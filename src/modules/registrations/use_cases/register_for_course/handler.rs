use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_course::command::RegisterForCourse;
use crate::modules::registrations::use_cases::register_for_course::decide::decide_register;
use crate::modules::registrations::use_cases::register_for_course::decision::Decision;
use crate::shared::core::errors::{ApplicationError, FieldError};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStore;

pub struct RegisterForCourseHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterForCourseHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates the form, prices it from the catalog and stores a pending
    /// registration. Nothing is written when validation or pricing fails.
    pub async fn handle(
        &self,
        command: RegisterForCourse,
    ) -> Result<Registration, ApplicationError> {
        command.validate()?;

        let course = self.store.get_course(command.course_id).await?;
        let schedule = match command.schedule_id {
            Some(id) => self.store.get_schedule(id).await?,
            None => None,
        };

        match decide_register(command, course.as_ref(), schedule.as_ref(), Utc::now()) {
            Decision::Accepted { registration } => {
                let registration = self.store.create_registration(registration).await?;
                info!(
                    registration_id = registration.id,
                    course_id = registration.course_id,
                    total_amount = %registration.total_amount,
                    "registration created"
                );
                Ok(registration)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Validation(vec![
                FieldError::new(reason.field(), reason.to_string()),
            ])),
        }
    }

    pub async fn get(&self, id: EntityId) -> Result<Registration, ApplicationError> {
        self.store
            .get_registration(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Registration not found".into()))
    }
}

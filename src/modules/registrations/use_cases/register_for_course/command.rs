use serde::Deserialize;
use validator::Validate;

use crate::shared::core::primitives::EntityId;

/// Registration form as posted by the client. Price and payment fields the
/// client may also send are not part of this type and are dropped on parse.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForCourse {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Dental license number is required"))]
    pub dental_license_number: String,

    #[validate(range(min = 1, message = "Course selection is required"))]
    pub course_id: EntityId,

    pub schedule_id: Option<EntityId>,
}

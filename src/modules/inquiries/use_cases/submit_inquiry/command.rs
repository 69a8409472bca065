use serde::Deserialize;
use validator::Validate;

use crate::modules::inquiries::core::inquiry::MAX_MESSAGE_CHARS;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitInquiry {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    pub dental_license_number: Option<String>,

    #[validate(length(
        min = 1,
        max = MAX_MESSAGE_CHARS,
        message = "Message must be between 1 and 1000 characters"
    ))]
    pub message: String,
}

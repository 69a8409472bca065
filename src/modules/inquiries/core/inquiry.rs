use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::EntityId;

pub const MAX_MESSAGE_CHARS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dental_license_number: Option<String>,
    pub message: String,
    pub inquiry_date: DateTime<Utc>,
    pub status: InquiryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dental_license_number: Option<String>,
    pub message: String,
    pub inquiry_date: DateTime<Utc>,
}

impl NewInquiry {
    pub fn into_inquiry(self, id: EntityId) -> Inquiry {
        Inquiry {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            dental_license_number: self.dental_license_number,
            message: self.message,
            inquiry_date: self.inquiry_date,
            status: InquiryStatus::New,
        }
    }
}

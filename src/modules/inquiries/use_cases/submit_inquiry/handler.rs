use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::modules::inquiries::core::inquiry::{Inquiry, NewInquiry};
use crate::modules::inquiries::use_cases::submit_inquiry::command::SubmitInquiry;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::entity_store::EntityStore;

pub struct SubmitInquiryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitInquiryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitInquiry) -> Result<Inquiry, ApplicationError> {
        command.validate()?;
        let inquiry = self
            .store
            .create_inquiry(NewInquiry {
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                dental_license_number: command.dental_license_number,
                message: command.message,
                inquiry_date: Utc::now(),
            })
            .await?;
        info!(inquiry_id = inquiry.id, "inquiry received");
        Ok(inquiry)
    }
}

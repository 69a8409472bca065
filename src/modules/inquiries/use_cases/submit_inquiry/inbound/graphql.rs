use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::inquiries::use_cases::submit_inquiry::command::SubmitInquiry;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlInquiryInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dental_license_number: Option<String>,
    pub message: String,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_inquiry(
        &self,
        context: &Context<'_>,
        input: GqlInquiryInput,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitInquiry {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            dental_license_number: input.dental_license_number,
            message: input.message,
        };

        let inquiry = state
            .inquiry_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(inquiry.id.to_string()))
    }
}

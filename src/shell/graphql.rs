use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::catalog::use_cases::browse_catalog::inbound::graphql::QueryRoot;
pub use crate::modules::inquiries::use_cases::submit_inquiry::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::catalog::use_cases::browse_catalog::inbound::http as catalog_http;
use crate::modules::inquiries::use_cases::submit_inquiry::inbound::http as inquiry_http;
use crate::modules::registrations::use_cases::checkout::inbound::http as checkout_http;
use crate::modules::registrations::use_cases::process_payment::inbound::http as payment_http;
use crate::modules::registrations::use_cases::reconcile_payment::inbound::http as reconcile_http;
use crate::modules::registrations::use_cases::register_for_course::inbound::http as register_http;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/courses", get(catalog_http::list_courses))
        .route("/courses/{id}", get(catalog_http::get_course))
        .route("/schedules", get(catalog_http::list_schedules))
        .route("/testimonials", get(catalog_http::list_testimonials))
        .route("/registrations", post(register_http::handle))
        .route("/registrations/{id}", get(register_http::show))
        .route("/registrations/{id}/payment", patch(reconcile_http::handle))
        .route("/payments/process", post(payment_http::handle))
        .route("/checkout", post(checkout_http::handle))
        .route("/inquiries", post(inquiry_http::handle));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

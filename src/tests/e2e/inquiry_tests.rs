use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_seeded_state;

fn inquiry(message: String) -> Body {
    Body::from(
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace.hopper@example.com",
            "message": message,
        })
        .to_string(),
    )
}

#[tokio::test]
async fn an_overlong_inquiry_is_rejected_and_not_stored() {
    let state = make_seeded_state().await;

    let response = router(state.clone())
        .oneshot(
            Request::post("/api/inquiries")
                .header("content-type", "application/json")
                .body(inquiry("x".repeat(1001)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.store.list_inquiries().await.unwrap().is_empty());
}

#[tokio::test]
async fn inquiries_are_stored_in_arrival_order() {
    let state = make_seeded_state().await;

    for message in ["first", "second"] {
        let response = router(state.clone())
            .oneshot(
                Request::post("/api/inquiries")
                    .header("content-type", "application/json")
                    .body(inquiry(message.into()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let stored = state.store.list_inquiries().await.unwrap();
    let messages: Vec<_> = stored.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(stored[1].id, 2);
}

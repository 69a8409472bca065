use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{TimeDelta, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::{make_declining_state, make_seeded_state, make_slow_gateway_state};

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn registration_form(course_id: u32) -> Value {
    json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace.hopper@example.com",
        "phone": "555-0100",
        "dentalLicenseNumber": "CA-DDS-12345",
        "courseId": course_id,
    })
}

async fn register(state: &AppState, course_id: u32) -> Value {
    let (status, json) = send(
        router(state.clone()),
        Method::POST,
        "/api/registrations",
        Some(registration_form(course_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

#[tokio::test]
async fn registers_then_pays_and_reconciles_the_registration() {
    let state = make_seeded_state().await;

    let registration = register(&state, 1).await;
    assert_eq!(registration["totalAmount"], "500.00");
    assert_eq!(registration["paymentStatus"], "pending");
    let id = registration["id"].as_u64().unwrap();

    let (status, payment) = send(
        router(state.clone()),
        Method::POST,
        "/api/payments/process",
        Some(json!({ "amount": 500, "cardToken": "tok_e2e", "registrationId": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["success"], true);
    assert_eq!(payment["status"], "completed");
    assert_eq!(payment["amount"], "500.00");

    let (status, stored) = send(
        router(state),
        Method::GET,
        &format!("/api/registrations/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["paymentStatus"], "completed");
    assert_eq!(stored["paymentId"], payment["paymentId"]);
}

#[tokio::test]
async fn a_declined_payment_fails_the_registration() {
    let state = make_declining_state("Insufficient funds").await;
    let id = register(&state, 2).await["id"].as_u64().unwrap();

    let (status, payment) = send(
        router(state.clone()),
        Method::POST,
        "/api/payments/process",
        Some(json!({ "amount": "1000.00", "cardToken": "tok_e2e", "registrationId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["success"], false);
    assert_eq!(payment["message"], "Insufficient funds");
    let stored = state.store.get_registration(id as u32).await.unwrap().unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Failed);
}

#[tokio::test(start_paused = true)]
async fn a_charge_that_outlives_the_timeout_fails_the_registration() {
    let state = make_slow_gateway_state(Duration::from_secs(60)).await;
    let id = register(&state, 1).await["id"].as_u64().unwrap();

    let (status, payment) = send(
        router(state.clone()),
        Method::POST,
        "/api/payments/process",
        Some(json!({ "amount": 500, "cardToken": "tok_e2e", "registrationId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["success"], false);
    assert_eq!(payment["message"], "payment timed out");
    let stored = state.store.get_registration(id as u32).await.unwrap().unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Failed);
}

#[tokio::test]
async fn a_registration_cannot_be_paid_twice() {
    let state = make_seeded_state().await;
    let id = register(&state, 1).await["id"].as_u64().unwrap();
    let payment = json!({ "amount": 500, "cardToken": "tok_e2e", "registrationId": id });

    let (first, _) = send(
        router(state.clone()),
        Method::POST,
        "/api/payments/process",
        Some(payment.clone()),
    )
    .await;
    let (second, _) = send(router(state), Method::POST, "/api/payments/process", Some(payment)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn checkout_runs_the_whole_sequence_in_one_call() {
    let state = make_seeded_state().await;
    let mut body = registration_form(2);
    body["scheduleId"] = json!(2);
    body["cardNumber"] = json!("4111 1111 1111 1111");
    body["expiryDate"] = json!("12/39");
    body["cvv"] = json!("123");

    let (status, json) = send(router(state.clone()), Method::POST, "/api/checkout", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["registration"]["totalAmount"], "1000.00");
    assert_eq!(json["registration"]["scheduleId"], 2);
    assert_eq!(json["registration"]["paymentStatus"], "completed");
    let completed = state
        .store
        .list_registrations_with_status(PaymentStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
}

#[tokio::test]
async fn an_external_reconciliation_completes_a_pending_registration() {
    let state = make_seeded_state().await;
    let id = register(&state, 3).await["id"].as_u64().unwrap();

    let (status, json) = send(
        router(state.clone()),
        Method::PATCH,
        &format!("/api/registrations/{id}/payment"),
        Some(json!({ "paymentStatus": "completed", "paymentId": "pay_external" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["paymentStatus"], "completed");

    let (status, _) = send(
        router(state),
        Method::PATCH,
        &format!("/api/registrations/{id}/payment"),
        Some(json!({ "paymentStatus": "completed", "paymentId": "pay_external" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "repeating the same outcome is accepted");
}

#[tokio::test]
async fn the_sweep_fails_abandoned_registrations() {
    let state = make_seeded_state().await;
    let abandoned = register(&state, 1).await["id"].as_u64().unwrap() as u32;

    let swept = state
        .sweep_handler
        .run_once(Utc::now() + TimeDelta::minutes(16))
        .await
        .unwrap();

    assert_eq!(swept, vec![abandoned]);
    let stored = state.store.get_registration(abandoned).await.unwrap().unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Failed);
}

#[tokio::test(start_paused = true)]
async fn the_sweep_leaves_a_registration_whose_charge_is_running() {
    let state = make_slow_gateway_state(Duration::from_secs(2)).await;
    let id = register(&state, 1).await["id"].as_u64().unwrap();
    let payment = json!({ "amount": 500, "cardToken": "tok_e2e", "registrationId": id });

    let ((status, payment), swept) = tokio::join!(
        send(router(state.clone()), Method::POST, "/api/payments/process", Some(payment)),
        async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            state
                .sweep_handler
                .run_once(Utc::now() + TimeDelta::minutes(16))
                .await
                .unwrap()
        },
    );

    assert!(swept.is_empty());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["success"], true);
    let stored = state.store.get_registration(id as u32).await.unwrap().unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn a_reconciliation_during_a_charge_is_a_conflict() {
    let state = make_slow_gateway_state(Duration::from_secs(2)).await;
    let id = register(&state, 1).await["id"].as_u64().unwrap();
    let payment = json!({ "amount": 500, "cardToken": "tok_e2e", "registrationId": id });

    let ((paid, _), (patched, _)) = tokio::join!(
        send(router(state.clone()), Method::POST, "/api/payments/process", Some(payment)),
        async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            send(
                router(state.clone()),
                Method::PATCH,
                &format!("/api/registrations/{id}/payment"),
                Some(json!({ "paymentStatus": "failed", "paymentId": "pay_external" })),
            )
            .await
        },
    );

    assert_eq!(paid, StatusCode::OK);
    assert_eq!(patched, StatusCode::CONFLICT);
}

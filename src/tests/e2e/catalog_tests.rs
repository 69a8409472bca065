use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_seeded_state;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router(make_seeded_state().await)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

#[tokio::test]
async fn lists_the_seeded_catalog() {
    let (status, courses) = get("/api/courses").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = courses
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Mobile Dentistry Fundamentals",
            "Advanced Mobile Practice Management",
            "Complete Mobile Dentistry Certification",
        ]
    );

    let (_, schedules) = get("/api/schedules?courseId=2").await;
    assert_eq!(schedules[0]["schedule"], "Evening Series");
    assert_eq!(schedules[0]["startDate"], "2025-03-01T18:00:00Z");
    assert_eq!(schedules[0]["maxParticipants"], 15);

    let (_, testimonials) = get("/api/testimonials").await;
    assert_eq!(testimonials.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn an_unknown_course_is_not_found() {
    let (status, body) = get("/api/courses/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found");
}

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn login(app: &Router) -> String {
    let (status, json) = send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(r#"{"email":"john@example.com","password":"password123"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn it_should_walk_the_whole_timesheet_flow() {
    let app = router(AppState::in_memory());

    // Seed the demo dataset over the wire.
    let (status, json) = send(&app, Method::GET, "/api/seed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Database seeded successfully");

    // Everything under /api/timesheets is gated.
    let (status, _) = send(&app, Method::GET, "/api/timesheets", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app).await;

    // Listing: 20 weeks, 4 pages of 5.
    let (status, json) = send(&app, Method::GET, "/api/timesheets", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 20);
    assert_eq!(json["totalPages"], 4);

    // w3 starts incomplete at 28 hours.
    let (status, json) = send(&app, Method::GET, "/api/timesheets/w3", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["week"]["status"], "incomplete");
    assert_eq!(json["week"]["totalHours"], 28.0);
    assert_eq!(json["entries"].as_array().unwrap().len(), 5);

    // Log 12 more hours: exactly 40 is completed.
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/timesheets/w3/entries",
        Some(&token),
        Some(
            r#"{"date":"2024-01-19","taskDescription":"Release prep","project":"Homepage Development","typeOfWork":"Testing","hours":12}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let entry_id = created["id"].as_str().unwrap().to_string();

    let (_, json) = send(&app, Method::GET, "/api/timesheets/w3", Some(&token), None).await;
    assert_eq!(json["week"]["status"], "completed");
    assert_eq!(json["week"]["totalHours"], 40.0);

    // Trim the new entry to 11.5 hours: 39.5 drops back to incomplete.
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/timesheets/w3/entries/{entry_id}"),
        Some(&token),
        Some(r#"{"hours":11.5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["hours"], 11.5);

    let (_, json) = send(&app, Method::GET, "/api/timesheets/w3", Some(&token), None).await;
    assert_eq!(json["week"]["status"], "incomplete");
    assert_eq!(json["week"]["totalHours"], 39.5);

    // Delete it again: back to the seeded 28 hours.
    let (status, json) = send(
        &app,
        Method::DELETE,
        &format!("/api/timesheets/w3/entries/{entry_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Entry deleted");

    let (_, json) = send(&app, Method::GET, "/api/timesheets/w3", Some(&token), None).await;
    assert_eq!(json["week"]["status"], "incomplete");
    assert_eq!(json["week"]["totalHours"], 28.0);

    // The listing surface reflects the filter semantics end to end.
    let (status, json) = send(
        &app,
        Method::GET,
        "/api/timesheets?status=missing&sortBy=startDate&sortOrder=desc",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["data"][0]["id"], "w20");
}

#[tokio::test]
async fn it_should_empty_a_week_down_to_missing() {
    let app = router(AppState::in_memory());
    send(&app, Method::GET, "/api/seed", None, None).await;
    let token = login(&app).await;

    // w8 has two seeded entries worth 16 hours.
    for entry_id in ["entry-31", "entry-32"] {
        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/timesheets/w8/entries/{entry_id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = send(&app, Method::GET, "/api/timesheets/w8", Some(&token), None).await;
    assert_eq!(json["week"]["status"], "missing");
    assert_eq!(json["week"]["totalHours"], 0.0);
    assert_eq!(json["entries"].as_array().unwrap().len(), 0);

    // The week itself survives losing its last entry.
    let (status, _) = send(&app, Method::GET, "/api/timesheets/w8", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

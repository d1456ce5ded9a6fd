use reqwest::StatusCode;

use serde_json::{json, Value};

use crate::helpers::TestApp;

fn island_story() -> Value {
    json!({
        "title": "Island Story",
        "director": "A. Roberts",
        "email": "a@x.com",
        "category": "Short Films"
    })
}

#[tokio::test]
async fn submit_returns_id_and_received_status() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json("api/submissions", &island_story())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());
    let body: Value = res.json().await.unwrap();
    assert!(body["id"].is_string());
    assert_eq!("received", body["status"]);
}

#[tokio::test]
async fn received_submissions_are_listed_by_status() {
    let app = TestApp::spawn().await;

    let id = app.create("api/submissions", &island_story()).await;
    let received = app.list("api/submissions?status=received").await;

    assert_eq!(1, received.len());
    assert_eq!(json!(id), received[0]["id"]);
    assert_eq!("Island Story", received[0]["title"]);
    assert_eq!("a@x.com", received[0]["email"]);
}

#[tokio::test]
async fn given_status_is_echoed_and_filterable() {
    let app = TestApp::spawn().await;
    let mut submission = island_story();
    submission["status"] = json!("in_review");

    let res = app
        .post_json("api/submissions", &submission)
        .await
        .expect("Failed to execute request");
    let body: Value = res.json().await.unwrap();
    assert_eq!("in_review", body["status"]);

    assert!(app.list("api/submissions?status=received").await.is_empty());
    assert_eq!(1, app.list("api/submissions?status=in_review").await.len());
    assert_eq!(1, app.list("api/submissions").await.len());
}

#[tokio::test]
async fn invalid_submissions_are_rejected_and_not_stored() {
    let app = TestApp::spawn().await;

    let test_cases: Vec<(&str, Value)> = vec![
        (
            "malformed email",
            json!({ "title": "T", "director": "D", "email": "not-an-email", "category": "Docs" }),
        ),
        (
            "missing email",
            json!({ "title": "T", "director": "D", "category": "Docs" }),
        ),
        (
            "missing category",
            json!({ "title": "T", "director": "D", "email": "a@x.com" }),
        ),
        (
            "zero duration",
            json!({ "title": "T", "director": "D", "email": "a@x.com", "category": "Docs", "duration_min": 0 }),
        ),
        (
            "null status",
            json!({ "title": "T", "director": "D", "email": "a@x.com", "category": "Docs", "status": null }),
        ),
        ("empty body", json!({})),
    ];

    for (desc, submission) in test_cases {
        let res = app
            .post_json("api/submissions", &submission)
            .await
            .expect("Failed to execute request");

        assert!(
            res.status().is_client_error(),
            "API did not fail when payload had {}",
            desc
        );
    }

    assert!(app.stored("submission").await.is_empty());
}

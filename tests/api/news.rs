use chrono::{DateTime, Utc};

use reqwest::StatusCode;

use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn published_at_defaults_to_server_time() {
    let app = TestApp::spawn().await;
    // Stored timestamps keep millisecond precision
    let before = Utc::now() - chrono::Duration::milliseconds(1);

    app.create(
        "api/news",
        &json!({ "title": "Lineup announced", "content": "Forty films from twelve islands." }),
    )
    .await;

    let news = app.list("api/news").await;
    let published_at: DateTime<Utc> = news[0]["published_at"]
        .as_str()
        .unwrap()
        .parse()
        .expect("published_at is not a timestamp");

    assert!(published_at >= before);
    assert!(published_at <= Utc::now());
}

#[tokio::test]
async fn created_news_round_trips() {
    let app = TestApp::spawn().await;
    let item = json!({
        "title": "Lineup announced",
        "content": "Forty films from twelve islands.",
        "cover_image": "https://example.com/covers/lineup.jpg",
        "published_at": "2026-09-01T12:00:00Z",
        "tags": ["lineup", "program"]
    });

    let id = app.create("api/news", &item).await;
    let news = app.list("api/news").await;

    assert_eq!(json!(id), news[0]["id"]);
    for (field, value) in item.as_object().unwrap() {
        assert_eq!(value, &news[0][field], "field {} changed", field);
    }
}

#[tokio::test]
async fn news_ignores_query_parameters() {
    let app = TestApp::spawn().await;
    app.create("api/news", &json!({ "title": "A", "content": "a" }))
        .await;

    assert_eq!(1, app.list("api/news?category=press").await.len());
}

#[tokio::test]
async fn missing_content_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json("api/news", &json!({ "title": "Lineup announced" }))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert!(app.stored("newsitem").await.is_empty());
}

use reqwest::StatusCode;

use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn category_filter_returns_only_matches() {
    let app = TestApp::spawn().await;
    app.create(
        "api/updates",
        &json!({ "title": "Accreditation open", "message": "Apply by Oct 1", "category": "accreditation" }),
    )
    .await;
    app.create(
        "api/updates",
        &json!({ "title": "Pitch market", "message": "Slots available", "category": "market" }),
    )
    .await;

    let market = app.list("api/updates?category=market").await;

    assert_eq!(1, market.len());
    assert_eq!("Pitch market", market[0]["title"]);
    assert!(market[0]["published_at"].is_string());
}

#[tokio::test]
async fn update_without_category_is_accepted() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json("api/updates", &json!({ "title": "Notice", "message": "Venue change" }))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());
}

#[tokio::test]
async fn invalid_published_at_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            "api/updates",
            &json!({ "title": "Notice", "message": "Venue change", "published_at": "soon" }),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert!(app.stored("update").await.is_empty());
}

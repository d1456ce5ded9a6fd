use reqwest::StatusCode;

use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn tier_filter_returns_only_matches() {
    let app = TestApp::spawn().await;
    app.create(
        "api/sponsors",
        &json!({
            "name": "Island Air",
            "tier": "gold",
            "logo_url": "https://example.com/logos/island-air.png",
            "website": "https://islandair.example/"
        }),
    )
    .await;
    app.create("api/sponsors", &json!({ "name": "Bay Radio", "tier": "media" }))
        .await;

    let gold = app.list("api/sponsors?tier=gold").await;

    assert_eq!(1, gold.len());
    assert_eq!("Island Air", gold[0]["name"]);
    assert_eq!("https://example.com/logos/island-air.png", gold[0]["logo_url"]);
    assert_eq!(2, app.list("api/sponsors").await.len());
}

#[tokio::test]
async fn undocumented_tier_is_accepted() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json("api/sponsors", &json!({ "name": "Friends", "tier": "community" }))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());
}

#[tokio::test]
async fn malformed_website_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            "api/sponsors",
            &json!({ "name": "Island Air", "tier": "gold", "website": "islandair" }),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    let body: Value = res.json().await.unwrap();
    assert_eq!("website", body["violations"][0]["field"]);
}

use reqwest::StatusCode;

use serde_json::{json, Value};

use filmfest::repo::DocumentStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::spawn().await;

    let res = app.get("").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body: Value = res.json().await.unwrap();
    assert_eq!(json!({ "message": "St. Martin IFF API is running" }), body);
}

#[tokio::test]
async fn probe_lists_collections() {
    let app = TestApp::spawn().await;
    app.create("api/sponsors", &json!({ "name": "Island Air", "tier": "gold" }))
        .await;

    let res = app.get("test").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body: Value = res.json().await.unwrap();
    assert_eq!("Running", body["backend"]);
    assert_eq!("Connected & Working", body["database"]);
    assert_eq!("Set", body["database_url"]);
    assert_eq!("film_festival_test", body["database_name"]);
    assert_eq!("Connected", body["connection_status"]);
    assert_eq!(json!(["sponsor"]), body["collections"]);
}

#[tokio::test]
async fn probe_caps_collections_at_ten() {
    let app = TestApp::spawn().await;
    let store = app.store.as_ref().unwrap();
    for i in 0..12 {
        store
            .insert_one(&format!("collection_{:02}", i), bson::doc! { "n": i })
            .await
            .unwrap();
    }

    let body: Value = app.get("test").await.unwrap().json().await.unwrap();

    assert_eq!(10, body["collections"].as_array().unwrap().len());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn().await;

    let res = app
        .request(reqwest::Method::GET, "api/films")
        .header("Origin", "https://stmartinfilmfest.example")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        Some("https://stmartinfilmfest.example"),
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
    );
}

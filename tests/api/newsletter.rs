use reqwest::{Method, StatusCode};

use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn subscribe_stores_subscription_with_default_language() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            "api/newsletter",
            &json!({ "email": "fan@example.com", "first_name": "Ana" }),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());
    let body: Value = res.json().await.unwrap();
    assert!(body["id"].is_string());

    let stored = app.stored("newslettersubscription").await;
    assert_eq!(1, stored.len());
    assert_eq!("fan@example.com", stored[0].get_str("email").unwrap());
    assert_eq!("en", stored[0].get_str("language").unwrap());
}

#[tokio::test]
async fn explicit_null_language_is_stored_as_null() {
    let app = TestApp::spawn().await;

    app.create(
        "api/newsletter",
        &json!({ "email": "fan@example.com", "language": null }),
    )
    .await;

    let stored = app.stored("newslettersubscription").await;
    assert_eq!(Some(&bson::Bson::Null), stored[0].get("language"));
}

#[tokio::test]
async fn subscribe_rejects_malformed_email() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json("api/newsletter", &json!({ "email": "fan at example" }))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert!(app.stored("newslettersubscription").await.is_empty());
}

#[tokio::test]
async fn newsletter_cannot_be_listed() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::GET, "api/newsletter")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(res.status().is_client_error());
}

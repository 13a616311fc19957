mod common;

use axum::http::StatusCode;
use common::test_server;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn venue_payload() -> Value {
    json!({
        "name": "The Musical Hop",
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae"],
        "seeking_talent": true,
    })
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ok", "service": "stagebook" })
    );
}

#[tokio::test]
async fn test_version_names_the_service() {
    let server = test_server();

    let response = server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["service"], json!("stagebook"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_create_venue_form_lists_choices() {
    let server = test_server();

    let response = server.get("/venues/create").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert!(body["states"].as_array().unwrap().contains(&json!("CA")));
    assert!(body["genres"].as_array().unwrap().contains(&json!("Jazz")));
}

#[tokio::test]
async fn test_create_venue_rejects_bad_phone() {
    let server = test_server();
    let mut payload = venue_payload();
    payload["phone"] = json!("1234567890");

    let response = server.post("/venues/create").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Validation failed"));
    assert_eq!(body["fields"]["phone"], json!(["Invalid phone number."]));
}

#[tokio::test]
async fn test_update_artist_rejects_unknown_genre() {
    let server = test_server();
    let mut payload = venue_payload();
    payload["genres"] = json!(["Polka"]);

    let response = server.post("/artists/4/edit").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["fields"]["genres"], json!(["Invalid genres value."]));
}

#[tokio::test]
async fn test_create_show_rejects_bad_start_time() {
    let server = test_server();
    let payload = json!({
        "title": "Spring Session",
        "artist_id": 4,
        "venue_id": 1,
        "start_time": "next friday",
    });

    let response = server.post("/shows/create").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["fields"]["start_time"], json!(["Not a valid datetime value."]));
}

#[tokio::test]
async fn test_create_show_form_defaults_to_now() {
    let server = test_server();

    let response = server.get("/shows/create").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let start_time = body["start_time"].as_str().unwrap();
    assert!(stagebook_core::time::parse_start_time(start_time).is_ok());
}

#[tokio::test]
async fn test_create_venue_without_name_reports_the_field() {
    let server = test_server();
    let payload = json!({
        "city": "San Francisco",
        "state": "CA",
        "phone": "123-123-1234",
        "genres": ["Jazz"],
    });

    let response = server.post("/venues/create").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Validation failed"));
    assert_eq!(body["fields"]["name"], json!(["This field is required."]));
}

#[tokio::test]
async fn test_create_show_without_ids_reports_each_field() {
    let server = test_server();
    let payload = json!({
        "title": "Spring Session",
        "start_time": "2035-04-01 20:00:00",
    });

    let response = server.post("/shows/create").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["fields"]["artist_id"], json!(["Invalid artist id."]));
    assert_eq!(body["fields"]["venue_id"], json!(["Invalid venue id."]));
}

#[tokio::test]
async fn test_create_show_with_mistyped_id_is_a_validation_error() {
    let server = test_server();
    let payload = json!({
        "title": "Spring Session",
        "artist_id": "four",
        "venue_id": 1,
        "start_time": "2035-04-01 20:00:00",
    });

    let response = server.post("/shows/create").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Validation failed"));
    assert_eq!(body["fields"]["body"].as_array().map(Vec::len), Some(1));
}

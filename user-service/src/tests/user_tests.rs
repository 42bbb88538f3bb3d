use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use tracklet_shared::test_utils::http_test_utils::{json_request, response_to_json};
use tracklet_shared::test_utils::test_logging::init_test_logging;

use crate::routes;
use crate::store::memory::MemoryUserStore;

// Each test gets a router over a fresh, empty store
fn test_app() -> Router {
    init_test_logging();
    routes::create_router_with_store(Arc::new(MemoryUserStore::new()))
}

#[tokio::test]
async fn root_reports_status_and_count() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("GET", "/", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert_eq!(body["message"], "User API is running");
    assert_eq!(body["total_users"], 0);
}

#[tokio::test]
async fn create_user_assigns_sequential_ids() {
    let app = test_app();

    for (i, name) in ["alice", "bob", "carol"].iter().enumerate() {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                Some(json!({ "name": name, "age": 30 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_to_json(response).await;
        assert_eq!(body["id"], i as u64 + 1);
        assert_eq!(body["name"], *name);
        assert_eq!(body["message"], "User created successfully");
        // Omitted optional email defaults to absent
        assert!(body["email"].is_null());
    }
}

#[tokio::test]
async fn created_user_is_readable_by_id() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            Some(json!({ "name": "alice", "age": 34, "email": "alice@example.com" })),
        ))
        .await
        .unwrap();
    let created = response_to_json(response).await;
    let id = created["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request("GET", &format!("/users/{}", id), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "alice");
    assert_eq!(body["age"], 34);
    assert_eq!(body["email"], "alice@example.com");
    // The creation confirmation message is not part of the stored record
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn missing_user_answers_200_with_error_body() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("GET", "/users/99", None))
        .await
        .unwrap();

    // Legacy contract: body shape signals the miss, not the status code
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn list_users_returns_collection_and_count() {
    let app = test_app();

    for name in ["alice", "bob"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/users",
                Some(json!({ "name": name, "age": 25 })),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(json_request("GET", "/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
    assert_eq!(body["users"][0]["name"], "alice");
    assert_eq!(body["users"][1]["name"], "bob");
}

#[tokio::test]
async fn root_count_tracks_creations() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            Some(json!({ "name": "alice", "age": 25 })),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("GET", "/", None))
        .await
        .unwrap();

    let body = response_to_json(response).await;
    assert_eq!(body["total_users"], 1);
}

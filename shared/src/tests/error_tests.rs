use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::ServiceError;
use crate::test_utils::http_test_utils::response_to_json;

#[tokio::test]
async fn not_found_renders_404_with_detail_body() {
    let response = ServiceError::NotFound("Todo with id 7 not found".into()).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_to_json(response).await;
    assert_eq!(body["detail"], "Todo with id 7 not found");
}

#[tokio::test]
async fn validation_renders_400_with_detail_body() {
    let response = ServiceError::Validation("age must be an integer".into()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_to_json(response).await;
    assert_eq!(body["detail"], "age must be an integer");
}

#[tokio::test]
async fn internal_renders_500_with_detail_body() {
    let response = ServiceError::Internal("store lock poisoned".into()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_to_json(response).await;
    assert_eq!(body["detail"], "store lock poisoned");
}

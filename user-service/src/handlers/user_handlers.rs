use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use tracklet_shared::error::{Result, ServiceError};
use tracklet_shared::models::ErrorResponse;

use crate::models::{CreateUserRequest, CreateUserResponse, ServiceStatus, UserListResponse};
use crate::store::UserStore;

// GET /
pub async fn service_status<S>(State(store): State<Arc<S>>) -> Result<Json<ServiceStatus>>
where
    S: UserStore,
{
    let total_users = store.count().await?;

    Ok(Json(ServiceStatus {
        message: "User API is running".into(),
        total_users,
    }))
}

// POST /users
pub async fn create_user<S>(
    State(store): State<Arc<S>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>>
where
    S: UserStore,
{
    let user = store.create_user(payload).await?;

    tracing::info!("Created user {}", user.id);

    Ok(Json(CreateUserResponse::created(user)))
}

// GET /users
pub async fn list_users<S>(State(store): State<Arc<S>>) -> Result<Json<UserListResponse>>
where
    S: UserStore,
{
    let users = store.list_users().await?;
    let count = users.len();

    Ok(Json(UserListResponse { users, count }))
}

// GET /users/:id
//
// Legacy contract: a missing user answers 200 with an error-shaped body,
// not 404. Existing callers key off the `error` field.
pub async fn get_user<S>(State(store): State<Arc<S>>, Path(id): Path<u64>) -> Response
where
    S: UserStore,
{
    match store.get_user(id).await {
        Ok(user) => Json(user).into_response(),
        Err(ServiceError::NotFound(_)) => Json(ErrorResponse {
            error: "User not found".into(),
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use tracklet_shared::error::Result;
use tracklet_shared::models::MessageResponse;

use crate::models::{CreateTodoRequest, StatsResponse, TodoListQuery, TodoRecord};
use crate::store::TodoStore;

// GET /
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "name": "Todo API",
        "version": "1.0.0",
        "endpoints": [
            "/todos",
            "/todos/{id}",
            "/todos/{id}/complete",
            "/stats",
        ],
    }))
}

// POST /todos
pub async fn create_todo<S>(
    State(store): State<Arc<S>>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoRecord>)>
where
    S: TodoStore,
{
    let todo = store.create_todo(payload).await?;

    tracing::info!("Created todo {}", todo.id);

    Ok((StatusCode::CREATED, Json(todo)))
}

// GET /todos
pub async fn list_todos<S>(
    State(store): State<Arc<S>>,
    Query(query): Query<TodoListQuery>,
) -> Result<Json<Vec<TodoRecord>>>
where
    S: TodoStore,
{
    let todos = store.list_todos(query.completed).await?;

    Ok(Json(todos))
}

// GET /todos/:id
pub async fn get_todo<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<TodoRecord>>
where
    S: TodoStore,
{
    let todo = store.get_todo(id).await?;

    Ok(Json(todo))
}

// PUT /todos/:id
pub async fn update_todo<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Json<TodoRecord>>
where
    S: TodoStore,
{
    let todo = store.replace_todo(id, payload).await?;

    tracing::info!("Replaced todo {}", id);

    Ok(Json(todo))
}

// PATCH /todos/:id/complete
pub async fn complete_todo<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<TodoRecord>>
where
    S: TodoStore,
{
    let todo = store.complete_todo(id).await?;

    Ok(Json(todo))
}

// DELETE /todos/:id
pub async fn delete_todo<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>>
where
    S: TodoStore,
{
    store.delete_todo(id).await?;

    tracing::info!("Deleted todo {}", id);

    Ok(Json(MessageResponse {
        message: format!("Todo {} deleted successfully", id),
    }))
}

// GET /stats
pub async fn stats<S>(State(store): State<Arc<S>>) -> Result<Json<StatsResponse>>
where
    S: TodoStore,
{
    let todos = store.list_todos(None).await?;

    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let pending = total - completed;

    // Literal "0%" on an empty store, one decimal place otherwise
    let completion_rate = if total == 0 {
        "0%".to_string()
    } else {
        format!("{:.1}%", completed as f64 / total as f64 * 100.0)
    };

    Ok(Json(StatsResponse {
        total,
        completed,
        pending,
        completion_rate,
    }))
}

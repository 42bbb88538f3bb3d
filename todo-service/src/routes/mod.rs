use axum::{
    extract::Request,
    middleware,
    routing::{get, patch},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::todo_handlers::{
    complete_todo, create_todo, delete_todo, get_todo, list_todos, service_info, stats,
    update_todo,
};
use crate::store::{memory::MemoryTodoStore, TodoStore};

/// Creates a router with the default in-memory store
pub fn create_router() -> Router {
    create_router_with_store(Arc::new(MemoryTodoStore::new()))
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>) -> Router
where
    S: TodoStore,
{
    info!("Setting up todo API routes");

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    Router::new()
        .route("/", get(service_info))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/:id/complete", patch(complete_todo))
        .route("/stats", get(stats))
        .with_state(store)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .fallback(|req: Request| async move {
            warn!("No route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
}

use axum::{extract::Request, middleware, routing::get, Router};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::user_handlers::{create_user, get_user, list_users, service_status};
use crate::store::{memory::MemoryUserStore, UserStore};

/// Creates a router with the default in-memory store
pub fn create_router() -> Router {
    create_router_with_store(Arc::new(MemoryUserStore::new()))
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>) -> Router
where
    S: UserStore,
{
    info!("Setting up user API routes");

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
        .route("/", get(service_status))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
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

mod handlers;
mod models;
mod routes;
mod store;

#[cfg(test)]
mod tests;

use tracing::info;

#[tokio::main]
async fn main() {
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tracklet_user_service=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".into());
    let addr = format!("0.0.0.0:{}", port);

    let app = routes::create_router();

    info!("User service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind service port");

    axum::serve(listener, app).await.expect("server error");
}

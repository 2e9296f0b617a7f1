//! Jury API /v1: REST endpoints over the court service
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/case/today", get(handlers::today_case))
        .route("/v1/case/generate", post(handlers::generate_case))
        .route("/v1/case/:id/verdicts", get(handlers::list_verdicts))
        .route("/v1/verdicts", post(handlers::submit_verdict))
        .route("/v1/verdicts/:id/vote", post(handlers::vote))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let state = AppState::seeded().expect("Failed to seed store");
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Jury API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}

//! Route table

use super::handlers;
use super::state::ApiState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

/// Build the service router. `body_limit` caps upload size in bytes.
pub fn router(state: ApiState, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/diseases/all", get(handlers::list_diseases))
        .route(
            "/diseases/new",
            get(handlers::get_disease_new).post(handlers::add_disease),
        )
        .route("/diseases/{disease_id}", get(handlers::get_disease))
        .route("/predict", post(handlers::predict))
        .route("/stats", get(handlers::stats))
        .route("/review/{rating}", post(handlers::review))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

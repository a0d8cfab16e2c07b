pub mod health;
pub mod templates;

use axum::{routing::get, Router};

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/templates", get(templates::list_templates_handler))
        // Export API
        .route("/api/resume/:id/export", get(handlers::handle_export))
        .route("/api/resume/:id/preview", get(handlers::handle_preview))
        .with_state(state)
}

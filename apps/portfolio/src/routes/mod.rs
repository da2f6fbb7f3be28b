pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::contact::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_page))
        .route("/contact", post(handlers::handle_contact_form))
        .route("/api/v1/messages", post(handlers::handle_create_message))
        .route("/health", get(health::health_handler))
        .route("/health/store", get(health::store_health_handler))
        .fallback(not_found)
        .with_state(state)
}

use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Customer Router Module
///
/// Pages for users with the 'customer' role. Nested under `/customer`.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::customer_dashboard))
}

use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Staff Router Module
///
/// Pages for users with the 'staff' role. Nested under `/staff`. Denied visitors are
/// redirected to login exactly like the admin pages.
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        // GET /staff/dashboard
        .route("/dashboard", get(handlers::staff_dashboard))
}

use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Admin Router Module
///
/// Pages exclusively for users with the 'admin' role. Nested under `/admin`.
///
/// Access Control:
/// Each handler evaluates `RequireRole(admin)` against the resolved session. Pending
/// sessions get the loading page; anyone else is sent to the login path with the
/// loading page as the redirect body.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/dashboard
        .route("/dashboard", get(handlers::admin_dashboard))
}

use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints reachable without a session. The landing page and `/dashboard` still
/// read the session, but only to decide where a signed-in visitor belongs.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness check for load balancers and monitors.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // Landing content for anonymous visitors; signed-in users are redirected to /dashboard.
        .route("/", get(handlers::landing))
        // GET /dashboard
        // Role dispatcher: redirects to /admin, /staff or /customer dashboards, or to login.
        .route("/dashboard", get(handlers::dashboard))
}

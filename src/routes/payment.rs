use crate::{AppState, handlers};
use axum::{Router, routing::post};

/// Payment Router Module
///
/// The mock payment API, nested under `/api`. No session is required: the endpoint
/// fabricates an order and touches no account data.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        // POST /api/payment/create-order
        // Validates `amount` (> 0) and returns a placeholder order record.
        .route("/payment/create-order", post(handlers::create_order))
}

use crate::{
    config::AppConfig,
    error::ApiError,
    guard::{Policy, evaluate},
    models::{Amount, CreateOrderRequest, ErrorResponse, PaymentOrder, Role},
    orders::GatewayState,
    pages,
    session::{CurrentSession, Session},
};
use axum::{Json, body::Bytes, extract::State, response::Response};

const ORDER_FAILED: &str = "Failed to create order";

// --- Pages ---

/// landing
///
/// [Public Route] Landing content for anonymous visitors. Signed-in users are sent
/// on to `/dashboard`.
pub async fn landing(
    CurrentSession(session): CurrentSession,
    State(config): State<AppConfig>,
) -> Response {
    pages::respond(evaluate(&Policy::guest_only(), &session), &config.login_path)
}

/// dashboard
///
/// [Public Route] Sends a signed-in user to the dashboard of their role, anyone else
/// to the login page.
pub async fn dashboard(
    CurrentSession(session): CurrentSession,
    State(config): State<AppConfig>,
) -> Response {
    let decision = evaluate(&Policy::role_home(config.login_path.as_str()), &session);
    pages::respond(decision, &config.login_path)
}

/// admin_dashboard
///
/// [Admin Route] Renders the admin dashboard for `role=admin`; everyone else is
/// redirected to login.
pub async fn admin_dashboard(
    CurrentSession(session): CurrentSession,
    State(config): State<AppConfig>,
) -> Response {
    guarded(Role::Admin, &config, session)
}

/// staff_dashboard
///
/// [Staff Route] Renders the staff dashboard for `role=staff`; everyone else is
/// redirected to login.
pub async fn staff_dashboard(
    CurrentSession(session): CurrentSession,
    State(config): State<AppConfig>,
) -> Response {
    guarded(Role::Staff, &config, session)
}

/// customer_dashboard
///
/// [Customer Route] Renders the customer's rentals page for `role=customer`.
pub async fn customer_dashboard(
    CurrentSession(session): CurrentSession,
    State(config): State<AppConfig>,
) -> Response {
    guarded(Role::Customer, &config, session)
}

fn guarded(role: Role, config: &AppConfig, session: Session) -> Response {
    let decision = evaluate(&Policy::require(role, config.login_path.as_str()), &session);
    if decision.navigate.is_some() {
        tracing::debug!(required = role.as_str(), actual = ?session.role(), "denied dashboard access");
    }
    pages::respond(decision, &config.login_path)
}

// --- Payments ---

/// create_order
///
/// [Public Route] Mock order creation. Validates the amount and returns a fabricated
/// order; no payment provider is contacted and nothing is stored.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent, so a plain
/// `fetch` posting `text/plain` still works. Decode failures are internal errors,
/// not validation errors: the caller only ever sees the generic message.
#[utoipa::path(
    post,
    path = "/api/payment/create-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = PaymentOrder),
        (status = 400, description = "Invalid amount", body = ErrorResponse),
        (status = 500, description = "Failed to create order", body = ErrorResponse)
    )
)]
pub async fn create_order(
    State(gateway): State<GatewayState>,
    State(config): State<AppConfig>,
    body: Bytes,
) -> Result<Json<PaymentOrder>, ApiError> {
    let request: CreateOrderRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::internal(ORDER_FAILED, e))?;

    let amount = request
        .amount
        .filter(Amount::is_positive)
        .ok_or(ApiError::InvalidInput("Invalid amount"))?;
    let currency = request.currency.unwrap_or(config.default_currency);

    let order = gateway
        .create_order(amount, currency)
        .await
        .map_err(|e| ApiError::internal(ORDER_FAILED, e))?;

    tracing::info!(order_id = %order.id, currency = %order.currency, "created mock payment order");
    Ok(Json(order))
}

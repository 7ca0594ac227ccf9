use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod orders;
pub mod pages;
pub mod session;

// Routing segregated by access tier (public, admin, staff, customer, payment API).
pub mod routes;
use routes::{admin, customer, payment, public, staff};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use orders::{GatewayState, MockOrderGateway};
pub use session::{JwtSessionProvider, MockSessionProvider, SessionState};

/// ApiDoc
///
/// OpenAPI document for the JSON API, served at `/api-docs/openapi.json`.
/// Page routes return HTML and are not part of it.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_order),
    components(
        schemas(
            models::CreateOrderRequest, models::PaymentOrder, models::ErrorResponse,
            models::Role, models::User,
        )
    ),
    tags(
        (name = "rentalpro", description = "RentalPro access gateway API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Single, immutable container of the services every request may need. Cloned per
/// request; the trait objects are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Resolves the session of each request for the route guards.
    pub sessions: SessionState,
    /// Creates payment orders (mocked).
    pub orders: GatewayState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Handlers and extractors pull only the component they need out of AppState.

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for GatewayState {
    fn from_ref(app_state: &AppState) -> GatewayState {
        app_state.orders.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routing structure, applies the observability layers and registers
/// the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .nest("/admin", admin::admin_routes())
        .nest("/staff", staff::staff_routes())
        .nest("/customer", customer::customer_routes())
        .nest("/api", payment::payment_routes())
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                // Generates a UUID request id for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // Wraps the request/response lifecycle in a span carrying that id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // Echoes x-request-id back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request span: method, URI and the `x-request-id` set above, so every
/// log line of one request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

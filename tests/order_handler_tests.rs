use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use rentalpro::{
    AppConfig, AppState, MockOrderGateway, MockSessionProvider, create_router,
    models::{ErrorResponse, PaymentOrder},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app(gateway: MockOrderGateway) -> axum::Router {
    let state = AppState {
        sessions: Arc::new(MockSessionProvider::anonymous()),
        orders: Arc::new(gateway),
        config: AppConfig::default(),
    };
    create_router(state)
}

fn create_order_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/payment/create-order")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_order_defaults_currency() {
    let response = app(MockOrderGateway::new())
        .oneshot(create_order_request(json!({ "amount": 500 }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["entity"], "order");
    assert_eq!(body["amount"], json!(500));
    assert_eq!(body["amount_due"], json!(500));
    assert_eq!(body["amount_paid"], json!(0));
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["status"], "created");
    assert!(body["id"].as_str().unwrap().starts_with("order_"));
    assert!(body["receipt"].as_str().unwrap().starts_with("receipt_"));
    assert!(body["created_at"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_order_keeps_supplied_currency_and_fractional_amount() {
    let response = app(MockOrderGateway::new())
        .oneshot(create_order_request(
            json!({ "amount": 12.5, "currency": "USD" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let order: PaymentOrder = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(order.currency, "USD");
    assert_eq!(order.amount.as_f64(), 12.5);
    assert_eq!(order.amount_due, order.amount);
}

#[tokio::test]
async fn test_create_order_uses_configured_default_currency() {
    let mut config = AppConfig::default();
    config.default_currency = "EUR".to_string();
    let state = AppState {
        sessions: Arc::new(MockSessionProvider::anonymous()),
        orders: Arc::new(MockOrderGateway::new()),
        config,
    };

    let response = create_router(state)
        .oneshot(create_order_request(json!({ "amount": 1 }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["currency"], "EUR");
}

#[tokio::test]
async fn test_create_order_rejects_non_positive_or_missing_amount() {
    for payload in [
        json!({ "amount": 0 }),
        json!({ "amount": -10 }),
        json!({ "amount": null }),
        json!({ "currency": "INR" }),
    ] {
        let response = app(MockOrderGateway::new())
            .oneshot(create_order_request(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.error, "Invalid amount");
    }
}

#[tokio::test]
async fn test_create_order_unparsable_body_is_internal_error() {
    for body in ["{not json", r#"{"amount": "500"}"#, ""] {
        let response = app(MockOrderGateway::new())
            .oneshot(create_order_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to create order" })
        );
    }
}

#[tokio::test]
async fn test_create_order_decodes_body_regardless_of_content_type() {
    // A browser fetch with a string body and no headers sends text/plain.
    for content_type in [None, Some("text/plain;charset=UTF-8")] {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/payment/create-order");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(Body::from(json!({ "amount": 500 }).to_string()))
            .unwrap();

        let response = app(MockOrderGateway::new()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{content_type:?}");
        let body = body_json(response).await;
        assert_eq!(body["amount_due"], json!(500));
        assert_eq!(body["currency"], "INR");
    }
}

#[tokio::test]
async fn test_create_order_text_plain_garbage_is_internal_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/payment/create-order")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("amount=500"))
        .unwrap();

    let response = app(MockOrderGateway::new()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to create order" })
    );
}

#[tokio::test]
async fn test_create_order_gateway_failure_hides_cause() {
    let response = app(MockOrderGateway::new_failing())
        .oneshot(create_order_request(json!({ "amount": 500 }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Failed to create order" }));
}

#[tokio::test]
async fn test_create_order_response_carries_request_id() {
    let response = app(MockOrderGateway::new())
        .oneshot(create_order_request(json!({ "amount": 500 }).to_string()))
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

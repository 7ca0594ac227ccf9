use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Amount, PaymentOrder};

/// GatewayError
///
/// Failures reported by an order gateway. Never shown to API callers.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("order gateway unavailable: {0}")]
    Unavailable(String),
}

/// OrderGateway
///
/// Contract for creating payment orders. The only implementation is the mock below;
/// a real payment provider would slot in behind the same trait.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(
        &self,
        amount: Amount,
        currency: String,
    ) -> Result<PaymentOrder, GatewayError>;
}

/// GatewayState
///
/// The concrete type used to share the order gateway across the application state.
pub type GatewayState = Arc<dyn OrderGateway>;

/// MockOrderGateway
///
/// Fabricates orders locally. Nothing is persisted and no external call is made.
#[derive(Clone, Default)]
pub struct MockOrderGateway {
    /// When true, every call returns a simulated failure.
    pub should_fail: bool,
}

impl MockOrderGateway {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn create_order(
        &self,
        amount: Amount,
        currency: String,
    ) -> Result<PaymentOrder, GatewayError> {
        if self.should_fail {
            return Err(GatewayError::Unavailable(
                "Mock Gateway Error: Simulation requested".to_string(),
            ));
        }
        Ok(fabricate_order(amount, currency, Utc::now()))
    }
}

/// fabricate_order
///
/// Builds the placeholder order for `now`. Ids derive from the millisecond clock and
/// collide for calls landing in the same millisecond.
pub fn fabricate_order(amount: Amount, currency: String, now: DateTime<Utc>) -> PaymentOrder {
    let millis = now.timestamp_millis();

    PaymentOrder {
        id: format!("order_{millis}"),
        entity: "order".to_string(),
        amount_due: amount.clone(),
        amount,
        amount_paid: 0,
        currency,
        receipt: format!("receipt_{millis}"),
        status: "created".to_string(),
        created_at: now.timestamp(),
    }
}

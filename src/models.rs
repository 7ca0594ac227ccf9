use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Identity ---

/// Role
///
/// Access level attached to a signed-in user. Serialized lowercase on the wire
/// and inside session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    /// Parses the lowercase wire form. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "staff" => Some(Self::Staff),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Customer => "customer",
        }
    }

    /// The dashboard a user with this role lands on after `/dashboard`.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Staff => "/staff/dashboard",
            Self::Customer => "/customer/dashboard",
        }
    }
}

/// User
///
/// The minimal identity resolved from a session: who, and with which role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub role: Role,
}

// --- Payment Orders ---

/// Amount
///
/// A positive order amount as sent by the client. Keeps the JSON number exactly as
/// written so that `500` is echoed back as `500` and `12.5` as `12.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(serde_json::Number);

impl Amount {
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }

    /// Zero, negative and non-representable values are all rejected.
    pub fn is_positive(&self) -> bool {
        self.as_f64() > 0.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

/// CreateOrderRequest
///
/// Input payload for `POST /api/payment/create-order`. Both fields are optional at
/// the decoding level; a missing amount is a validation failure, a missing currency
/// falls back to the configured default.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[ts(type = "number | null")]
    #[schema(value_type = Option<f64>, example = 500)]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "INR")]
    pub currency: Option<String>,
}

/// PaymentOrder
///
/// The fabricated order record returned by the mock gateway. Shaped like a
/// payment-gateway order so the frontend checkout can be wired against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PaymentOrder {
    /// `order_<unix millis>`; not unique under concurrent calls.
    pub id: String,
    /// Always `"order"`.
    pub entity: String,
    #[ts(type = "number")]
    #[schema(value_type = f64)]
    pub amount: Amount,
    pub amount_paid: u64,
    #[ts(type = "number")]
    #[schema(value_type = f64)]
    pub amount_due: Amount,
    pub currency: String,
    pub receipt: String,
    /// Always `"created"`.
    pub status: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// ErrorResponse
///
/// Body of every JSON error. Carries a static message only.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

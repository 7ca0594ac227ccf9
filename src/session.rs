use std::{convert::Infallible, sync::Arc};

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    models::{Role, User},
};

/// Cookie carrying the session token for browser page loads.
pub const SESSION_COOKIE: &str = "session";

/// Local-only header that stands in for a signed session.
pub const BYPASS_ROLE_HEADER: &str = "x-user-role";

/// Optional companion to [`BYPASS_ROLE_HEADER`] fixing the user id.
pub const BYPASS_ID_HEADER: &str = "x-user-id";

/// Session
///
/// The authentication snapshot a route guard is evaluated against. `Pending` means the
/// identity provider has not settled yet; it never overlaps with a known user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Pending,
    Unauthenticated,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}

/// Claims
///
/// Payload of a session token issued by the identity provider. The role travels as
/// a plain string so an unknown value degrades to an anonymous session instead of a
/// decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// SessionProvider
///
/// Resolves the session of an incoming request. Resolution never fails: anything
/// that cannot be verified is an unauthenticated visitor.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn resolve(&self, parts: &Parts) -> Session;
}

/// SessionState
///
/// The concrete type used to share the session provider across the application state.
pub type SessionState = Arc<dyn SessionProvider>;

/// JwtSessionProvider
///
/// Verifies HS256 session tokens taken from `Authorization: Bearer` or, for plain
/// page navigation, from the `session` cookie. In `Env::Local` the `x-user-role`
/// header is honoured first so dashboards can be opened without an identity provider.
pub struct JwtSessionProvider {
    env: Env,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionProvider {
    pub fn new(config: &AppConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            env: config.env,
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    fn bypass(&self, headers: &HeaderMap) -> Option<User> {
        if self.env != Env::Local {
            return None;
        }
        let role = headers
            .get(BYPASS_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Role::parse)?;
        let id = headers
            .get(BYPASS_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .unwrap_or(Uuid::nil());

        Some(User { id, role })
    }

    fn token(headers: &HeaderMap) -> Option<String> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        bearer.or_else(|| {
            CookieJar::from_headers(headers)
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_owned())
        })
    }
}

#[async_trait]
impl SessionProvider for JwtSessionProvider {
    async fn resolve(&self, parts: &Parts) -> Session {
        if let Some(user) = self.bypass(&parts.headers) {
            tracing::debug!(role = user.role.as_str(), "session resolved from local bypass header");
            return Session::Authenticated(user);
        }

        let Some(token) = Self::token(&parts.headers) else {
            return Session::Unauthenticated;
        };

        let claims = match decode::<Claims>(&token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(error = %e, "rejected session token");
                return Session::Unauthenticated;
            }
        };

        match Role::parse(&claims.role) {
            Some(role) => Session::Authenticated(User {
                id: claims.sub,
                role,
            }),
            None => {
                tracing::debug!(role = %claims.role, "session token carries an unknown role");
                Session::Unauthenticated
            }
        }
    }
}

/// MockSessionProvider
///
/// Returns the same session for every request. Used by tests to drive guards
/// through states a real provider only passes through briefly, such as `Pending`.
#[derive(Clone)]
pub struct MockSessionProvider {
    session: Session,
}

impl MockSessionProvider {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn pending() -> Self {
        Self::new(Session::Pending)
    }

    pub fn anonymous() -> Self {
        Self::new(Session::Unauthenticated)
    }

    pub fn signed_in(role: Role) -> Self {
        Self::new(Session::Authenticated(User {
            id: Uuid::new_v4(),
            role,
        }))
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn resolve(&self, _parts: &Parts) -> Session {
        self.session.clone()
    }
}

/// CurrentSession
///
/// Extractor handing the resolved [`Session`] to page handlers. Never rejects; the
/// route guard decides what an anonymous or pending visitor sees.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let provider = SessionState::from_ref(state);
        Ok(CurrentSession(provider.resolve(parts).await))
    }
}

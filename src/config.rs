use std::env;

/// Fallback signing secret for local sessions. Never accepted in production.
const LOCAL_SESSION_SECRET: &str = "rentalpro-local-session-secret";

/// AppConfig
///
/// Holds the application's entire configuration state. Loaded once at startup and
/// shared (by clone) into every handler and extractor via `FromRef<AppState>`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls the development session bypass and log format.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // HS256 secret used to verify incoming session tokens.
    pub jwt_secret: String,
    // Currency applied to orders that do not name one.
    pub default_currency: String,
    // Where denied visitors of protected pages are sent.
    pub login_path: String,
}

/// Env
///
/// Defines the runtime context. `Local` enables the `x-user-role` session bypass
/// and pretty logs; `Production` requires explicit secrets and emits JSON logs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Safe, non-panicking configuration for test state setup.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:3000".to_string(),
            jwt_secret: LOCAL_SESSION_SECRET.to_string(),
            default_currency: "INR".to_string(),
            login_path: "/auth/login".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads all parameters from environment variables (after `.env` has been applied
    /// by the caller) and implements the **fail-fast** principle.
    ///
    /// # Panics
    /// Panics in `production` when `SESSION_JWT_SECRET` is not set, so the service can
    /// never start verifying sessions against a well-known secret.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let jwt_secret = match env {
            Env::Production => env::var("SESSION_JWT_SECRET")
                .expect("FATAL: SESSION_JWT_SECRET must be set in production."),
            Env::Local => env::var("SESSION_JWT_SECRET")
                .unwrap_or_else(|_| LOCAL_SESSION_SECRET.to_string()),
        };

        Self {
            env,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            jwt_secret,
            default_currency: env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/auth/login".to_string()),
        }
    }
}

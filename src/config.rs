//! Application configuration management.
//!
//! This module defines the configuration record for the dashboard backend
//! and loads it from environment variables, with documented defaults for
//! every field. Loading cannot fail: a missing variable gets its default,
//! and a malformed typed value falls back to its default with a warning.

use std::time::Duration;

use crate::env::{EnvSource, ProcessEnv, load_dotenv};
use crate::parse::{or_default, parse_duration, parse_u32, split_list};

/// Application configuration loaded from environment variables.
///
/// Immutable after construction; built once at process startup and shared
/// read-only with the rest of the service. Every field is always populated,
/// either from its environment variable or from its default.
///
/// # Environment Variables
///
/// All variables are optional:
///
/// - `PORT`: service listen port (default "8080")
/// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: PostgreSQL
///   connection settings
/// - `JWT_SECRET`: token signing key
/// - `JWT_EXPIRATION`: token lifetime as a duration literal (default "24h")
/// - `CORS_ALLOWED_ORIGINS`: comma-separated origin list
/// - `RATE_LIMIT`: requests per window (default 100)
/// - `RATE_LIMIT_WINDOW`: duration literal (default "15m")
/// - `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`: OAuth credentials (default
///   empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service listen port, kept as a string for address formatting.
    pub port: String,

    // Database connection settings
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    /// Database password. Never log this value.
    pub db_password: String,
    pub db_name: String,

    /// JWT signing secret. Never log this value.
    pub jwt_secret: String,
    /// Lifetime of issued JWTs.
    pub jwt_expiration: Duration,

    /// Origins allowed by the CORS layer, in the order they were listed.
    pub cors_allowed_origins: Vec<String>,

    /// Requests allowed per rate-limit window.
    pub rate_limit: u32,
    /// Length of one rate-limit window.
    pub rate_limit_window: Duration,

    // Google OAuth credentials, empty when OAuth login is not configured
    pub google_client_id: String,
    /// OAuth client secret. Never log this value.
    pub google_client_secret: String,
}

/// Default JWT lifetime if JWT_EXPIRATION is not set or malformed.
fn default_jwt_expiration() -> Duration {
    Duration::from_secs(24 * 3600)
}

/// Default rate-limit window if RATE_LIMIT_WINDOW is not set or malformed.
fn default_rate_limit_window() -> Duration {
    Duration::from_secs(15 * 60)
}

/// Default CORS origin list: the local frontend dev server.
fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Default rate limit if RATE_LIMIT is not set or malformed.
const DEFAULT_RATE_LIMIT: u32 = 100;

impl Config {
    /// Load configuration from the process environment.
    ///
    /// This method first attempts to seed the environment from a `.env`
    /// file (which is optional; its absence is logged and ignored), then
    /// resolves every field from environment variables.
    ///
    /// This operation cannot fail: every missing or malformed value is
    /// replaced by its documented default.
    pub fn from_env() -> Self {
        // Seed missing variables from .env if present (no-op in production
        // deployments without one)
        load_dotenv();

        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an injected variable source.
    ///
    /// Production code reaches this through [`Config::from_env`]; tests call
    /// it directly with a `HashMap` so they never touch process state.
    pub fn from_source(env: &impl EnvSource) -> Self {
        let string = |key: &str, default: &str| env.get(key).unwrap_or_else(|| default.to_string());

        let rate_limit = match env.get("RATE_LIMIT") {
            Some(raw) => or_default("RATE_LIMIT", &raw, DEFAULT_RATE_LIMIT, parse_u32),
            None => DEFAULT_RATE_LIMIT,
        };

        let rate_limit_window = match env.get("RATE_LIMIT_WINDOW") {
            Some(raw) => or_default(
                "RATE_LIMIT_WINDOW",
                &raw,
                default_rate_limit_window(),
                parse_duration,
            ),
            None => default_rate_limit_window(),
        };

        let jwt_expiration = match env.get("JWT_EXPIRATION") {
            Some(raw) => or_default(
                "JWT_EXPIRATION",
                &raw,
                default_jwt_expiration(),
                parse_duration,
            ),
            None => default_jwt_expiration(),
        };

        let cors_allowed_origins = match env.get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => split_list(&raw),
            None => default_cors_allowed_origins(),
        };

        Self {
            port: string("PORT", "8080"),
            db_host: string("DB_HOST", "localhost"),
            db_port: string("DB_PORT", "5432"),
            db_user: string("DB_USER", "your_db_user"),
            db_password: string("DB_PASSWORD", "your_db_password"),
            db_name: string("DB_NAME", "dashboard_db"),
            jwt_secret: string("JWT_SECRET", "your_jwt_secret_key"),
            jwt_expiration,
            cors_allowed_origins,
            rate_limit,
            rate_limit_window,
            google_client_id: string("GOOGLE_CLIENT_ID", ""),
            google_client_secret: string("GOOGLE_CLIENT_SECRET", ""),
        }
    }
}

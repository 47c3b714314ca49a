//! Dashboard Backend - Runtime Configuration
//!
//! This library loads the runtime configuration for the dashboard backend service from environment variables, optionally seeded from a local `.env` file during development.
//!
//! # Design
//!
//! - **One record**: everything lands in a single immutable [`Config`] value, built once at startup
//! - **Env-then-default**: each variable is looked up in the environment; missing values get documented defaults
//! - **Never fails**: malformed typed values (integers, durations) are logged and replaced by their defaults, so startup cannot be blocked by a config typo
//! - **Injectable source**: lookups go through the [`EnvSource`] trait, so tests feed in a `HashMap` instead of mutating process state
//!
//! # Loading Flow
//!
//! 1. Seed the process environment from `.env` if present (never overriding set variables)
//! 2. Resolve each field from its environment variable or default
//! 3. Coerce typed fields (integers, duration literals, comma-separated lists)
//! 4. Return the assembled [`Config`]
//!
//! # Example
//!
//! ```no_run
//! let config = dashboard_config::Config::from_env();
//! let addr = format!("0.0.0.0:{}", config.port);
//! ```

pub mod config;
pub mod env;
pub mod parse;

pub use config::Config;
pub use env::{EnvSource, ProcessEnv};

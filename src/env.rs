//! Environment variable access and `.env` file seeding.
//!
//! Configuration lookups go through the [`EnvSource`] trait instead of
//! `std::env` directly. This lets the loader read the real process
//! environment in production while tests inject a plain `HashMap`, without
//! ever mutating process-global state from a test.

use std::collections::HashMap;

/// A read-only source of environment variables.
///
/// Implemented for the process environment ([`ProcessEnv`]) and for
/// `HashMap<String, String>` (used in tests).
pub trait EnvSource {
    /// Look up a variable by name.
    ///
    /// Returns `None` if the variable is unset (or, for the process
    /// environment, not valid Unicode).
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
///
/// This is what production code passes to `Config::from_source`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Seed the process environment from an optional `.env` file.
///
/// Variables already set in the process environment are never overridden;
/// the file only fills in gaps. A missing or unreadable file is expected in
/// production deployments and is logged at info level, never treated as an
/// error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(_) => {
            tracing::info!("No .env file found, reading configuration from environment variables")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn map_source_returns_set_values() {
        let mut env = HashMap::new();
        env.insert("DASHBOARD_TEST_KEY".to_string(), "value".to_string());

        assert_eq!(
            EnvSource::get(&env, "DASHBOARD_TEST_KEY"),
            Some("value".to_string())
        );
        assert_eq!(EnvSource::get(&env, "DASHBOARD_TEST_UNSET"), None);
    }

    #[test]
    fn env_file_seeds_unset_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DASHBOARD_ENV_SEED_TEST=from_file").unwrap();

        dotenvy::from_path(file.path()).unwrap();

        assert_eq!(
            ProcessEnv.get("DASHBOARD_ENV_SEED_TEST").as_deref(),
            Some("from_file")
        );
    }

    #[test]
    fn env_file_does_not_override_existing_variables() {
        // Seed the variable through one file, then load a second file that
        // tries to change it. dotenvy leaves already-set variables alone.
        let mut first = tempfile::NamedTempFile::new().unwrap();
        writeln!(first, "DASHBOARD_ENV_OVERRIDE_TEST=original").unwrap();
        dotenvy::from_path(first.path()).unwrap();

        let mut second = tempfile::NamedTempFile::new().unwrap();
        writeln!(second, "DASHBOARD_ENV_OVERRIDE_TEST=changed").unwrap();
        dotenvy::from_path(second.path()).unwrap();

        assert_eq!(
            ProcessEnv.get("DASHBOARD_ENV_OVERRIDE_TEST").as_deref(),
            Some("original")
        );
    }

    #[test]
    fn missing_env_file_is_not_fatal() {
        assert!(dotenvy::from_path("/nonexistent/path/.env").is_err());
        // load_dotenv absorbs the same failure.
        load_dotenv();
    }
}

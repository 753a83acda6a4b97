//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HIREBOARD` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! in-memory setup.
//!
//! # Example
//!
//! ```no_run
//! use hireboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Store backend: {:?}", config.store.backend);
//! ```

mod dashboard;
mod error;
mod logging;
mod store;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use store::{StoreBackend, StoreConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Project store backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HIREBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HIREBOARD__STORE__BACKEND=file` -> `store.backend = file`
    /// - `HIREBOARD__DASHBOARD__DEFAULT_CLIENT_VIEW=all` -> `dashboard.default_client_view = all`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HIREBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.store.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{ClientView, ProviderView};
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "HIREBOARD__STORE__BACKEND",
        "HIREBOARD__STORE__DATA_DIR",
        "HIREBOARD__STORE__SEED_SAMPLE_DATA",
        "HIREBOARD__DASHBOARD__DEFAULT_PROVIDER_VIEW",
        "HIREBOARD__DASHBOARD__SNAPSHOT_USER",
        "HIREBOARD__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.dashboard.default_provider_view, ProviderView::Hired);
        assert_eq!(config.dashboard.default_client_view, ClientView::Active);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_backend_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HIREBOARD__STORE__BACKEND", "file");
        env::set_var("HIREBOARD__STORE__DATA_DIR", "/tmp/hireboard");
        env::set_var("HIREBOARD__STORE__SEED_SAMPLE_DATA", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(
            config.store.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/hireboard"))
        );
        assert!(!config.store.seed_sample_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_without_dir_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HIREBOARD__STORE__BACKEND", "file");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("store.data_dir"))
        );
    }

    #[test]
    fn test_dashboard_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HIREBOARD__DASHBOARD__DEFAULT_PROVIDER_VIEW", "completed");
        env::set_var("HIREBOARD__DASHBOARD__SNAPSHOT_USER", "user-42");
        env::set_var("HIREBOARD__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dashboard.default_provider_view, ProviderView::Completed);
        assert_eq!(config.dashboard.snapshot_user, "user-42");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_view_mode_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HIREBOARD__DASHBOARD__DEFAULT_PROVIDER_VIEW", "active");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}

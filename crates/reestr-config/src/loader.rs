//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use reestr_core::ReestrError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and validates the configuration once, at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader reading from `config_dir`.
    ///
    /// Sources are layered in order, later ones winning:
    /// 1. `{config_dir}/default.toml`
    /// 2. `{config_dir}/{REESTR_ENVIRONMENT}.toml` (`development` when unset)
    /// 3. `{config_dir}/local.toml`
    /// 4. Environment variables with the `REESTR_` prefix and `__` separator
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// A loader for `./config`.
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads the layered configuration and validates it.
    ///
    /// Missing files are skipped. Every validation problem is reported in
    /// one `Configuration` error.
    pub fn load(&self) -> Result<AppConfig, ReestrError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("REESTR_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("REESTR")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_reestr_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            ReestrError::Configuration(messages.join("; "))
        })?;

        Ok(app_config)
    }

    /// The directory this loader reads from.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn config_error_to_reestr_error(err: ConfigError) -> ReestrError {
    ReestrError::Configuration(err.to_string())
}

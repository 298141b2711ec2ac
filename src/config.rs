use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "agripredict";
const ENV_PREFIX: &str = "AGRIPREDICT";

/// Invalid values that parse fine but cannot be served with.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("bind_address must not be empty")]
    EmptyBindAddress,
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Settings of the asset host.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Directory holding the built front-end bundle.
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            static_dir: PathBuf::from("workspace/frontend/dist"),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// `.env` is read first, so its `AGRIPREDICT_*` entries apply too. An
    /// explicitly named file must exist; the default `agripredict.*` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: ServerConfig = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("static_dir", defaults.static_dir.to_string_lossy().into_owned())?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Command-line flags win over every other source.
    pub fn with_overrides(mut self, bind_address: Option<String>, static_dir: Option<PathBuf>) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::EmptyBindAddress);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9999\"").unwrap();
        writeln!(file, "static_dir = \"/srv/agripredict\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9999");
        assert_eq!(config.static_dir, PathBuf::from("/srv/agripredict"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ServerConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "request_timeout_secs = 0").unwrap();

        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::ZeroTimeout));
    }

    #[test]
    fn flags_override_loaded_values() {
        let config = ServerConfig::default()
            .with_overrides(Some("127.0.0.1:1".into()), None)
            .with_overrides(None, Some(PathBuf::from("dist")));
        assert_eq!(config.bind_address, "127.0.0.1:1");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.index_file(), PathBuf::from("dist").join("index.html"));
    }

    #[test]
    fn empty_bind_address_is_invalid() {
        let config = ServerConfig {
            bind_address: "  ".into(),
            ..ServerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyBindAddress));
    }
}

//! Configuration for the Bootpay client.

use std::path::Path;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration.
///
/// Credentials are required; everything else falls back to the live gateway
/// defaults.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout applied to every request (default: 3).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub application_id: String,
    pub private_key: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("application_id", &self.application_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

// Default values
pub(crate) fn default_base_url() -> String {
    "https://api.bootpay.co.kr".to_string()
}
pub(crate) fn default_timeout_secs() -> u64 {
    3
}

impl ClientConfig {
    pub fn new(application_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            application_id: application_id.into(),
            private_key: private_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (BOOTPAY__KEY format)
    /// 2. bootpay.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("bootpay").required(false))
            .add_source(
                Environment::with_prefix("BOOTPAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an explicit file, without consulting the environment.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("base_url", default_base_url())?
            .set_default("timeout_secs", default_timeout_secs() as i64)
    }
}

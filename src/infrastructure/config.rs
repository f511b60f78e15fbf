//! # Configuration
//!
//! Layered configuration for carrier credentials and client settings.
//!
//! Sources are merged in order: an optional `multiship` config file (TOML,
//! YAML, or JSON — whatever the `config` crate recognizes), then
//! `MULTISHIP_`-prefixed environment variables, with a `.env` file loaded
//! first when present. Later sources win.
//!
//! Credentials are keyed by carrier name so an application can configure
//! any subset of carriers:
//!
//! ```toml
//! timeout_ms = 10000
//! timezone_data = "data/timezones.json"
//!
//! [carriers.dhl]
//! site_id = "DServiceVal"
//! password = "secret"
//! account_number = "123456789"
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default per-request timeout for carrier transports.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Credentials for one carrier account.
///
/// Carriers disagree on what they call their secrets, so every field is
/// optional; each adapter validates the fields it needs at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCredentials {
    /// Account username, where the carrier uses one.
    pub username: Option<String>,
    /// Account password or API secret.
    pub password: Option<String>,
    /// Site or client identifier (DHL site id, FedEx client id).
    pub site_id: Option<String>,
    /// API key, for key-authenticated carriers.
    pub api_key: Option<String>,
    /// Billing account number.
    pub account_number: Option<String>,
    /// Override for the carrier's endpoint, e.g. a sandbox URL.
    pub base_url: Option<String>,
}

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultishipConfig {
    /// Per-request timeout in milliseconds for carrier transports.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Path to the generated timezone data file, when tracking timestamps
    /// should be localized.
    #[serde(default)]
    pub timezone_data: Option<PathBuf>,
    /// Credentials keyed by carrier name ("dhl", "fedex", ...).
    #[serde(default)]
    pub carriers: HashMap<String, CarrierCredentials>,
}

impl Default for MultishipConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            timezone_data: None,
            carriers: HashMap::new(),
        }
    }
}

impl MultishipConfig {
    /// Loads configuration from the default sources.
    ///
    /// Reads `.env` when present, then merges an optional `multiship`
    /// config file with `MULTISHIP_`-prefixed environment variables
    /// (nested keys separated by `__`, e.g.
    /// `MULTISHIP_CARRIERS__DHL__PASSWORD`).
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] if a source is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Config::builder()
            .add_source(File::with_name("multiship").required(false))
            .add_source(Environment::with_prefix("MULTISHIP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] if the file is missing or
    /// malformed.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Returns the credentials for a carrier, when configured.
    #[must_use]
    pub fn carrier(&self, name: &str) -> Option<&CarrierCredentials> {
        self.carriers.get(name)
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

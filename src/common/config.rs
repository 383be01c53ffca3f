//! Settings file handling
//!
//! The smoke test reads an optional TOML settings file for the email
//! collaborator and the store backends. Credentials may be overridden
//! through the environment so they never have to live on disk.

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::config_path;
use super::Result;

/// Environment variable overriding the SMTP password
pub const SMTP_PASSWORD_VAR: &str = "SMOKETEST_SMTP_PASSWORD";

/// Environment variable overriding the managed-service base URL
pub const SERVICE_URL_VAR: &str = "SMOKETEST_SERVICE_URL";

/// Main settings structure
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    /// Email notification settings
    #[serde(default)]
    pub email: EmailConfig,

    /// Reservation store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Settings for the outbound email collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Whether the email suite should attempt a send at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// From address; the suite records a configuration failure when absent
    pub from: Option<String>,

    /// Recipient of the test message
    #[serde(default = "default_to")]
    pub to: String,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username; defaults to the from address when unset
    pub smtp_user: Option<String>,

    /// SMTP password; usually supplied via SMOKETEST_SMTP_PASSWORD
    pub smtp_password: Option<String>,

    /// Whether the relay requires authentication
    #[serde(default = "default_smtp_auth")]
    pub smtp_auth: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            from: None,
            to: default_to(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_user: None,
            smtp_password: None,
            smtp_auth: default_smtp_auth(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_to() -> String {
    "checkin.smoketest@example.com".to_string()
}
fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    587
}
fn default_smtp_auth() -> bool {
    true
}

/// Settings for the reservation store backends
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path used by the file backend
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Base URL of the managed service, e.g. "https://reservations.example.com"
    pub service_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            service_url: None,
        }
    }
}

fn default_file_path() -> PathBuf {
    PathBuf::from("smoketest.db.json")
}

impl Settings {
    /// Load settings from the default settings file
    ///
    /// Returns defaults if the file doesn't exist. Environment overrides
    /// for the SMTP password and the managed-service URL are applied last.
    pub fn load() -> Result<Self> {
        let mut settings = if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| super::Error::file_read(&path, &e))?;
                toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()))?
            } else {
                Self::default()
            }
        } else {
            Self::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Parse settings from a TOML string (no environment overrides)
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(password) = std::env::var(SMTP_PASSWORD_VAR) {
            self.email.smtp_password = Some(password);
        }
        if let Ok(url) = std::env::var(SERVICE_URL_VAR) {
            self.store.service_url = Some(url);
        }
    }
}

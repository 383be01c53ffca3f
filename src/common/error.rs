//! Error types for the smoke-test CLI
//!
//! Every failure a step can produce ends up here so the runner can record
//! it with a single string representation.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke-test CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid settings file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("There is no from email address configured")]
    MissingFromAddress,

    #[error("SMTP authentication is enabled but no password is configured")]
    MissingSmtpPassword,

    #[error("No managed-service URL configured. Set store.service_url in the settings file or SMOKETEST_SERVICE_URL")]
    MissingServiceUrl,

    // === Store Errors ===
    #[error("Reservation '{0}' not found in the store")]
    ReservationNotFound(String),

    #[error("Store schema has not been created yet")]
    SchemaMissing,

    #[error("Managed service returned {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    // === Mail Errors ===
    #[error("Invalid email address: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    MailCompose(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    SmtpTransport(#[from] lettre::transport::smtp::Error),

    // === IO / Serialization Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a remote status error from an HTTP response code
    pub fn remote_status(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteStatus {
            status,
            message: message.into(),
        }
    }
}

//! Common utilities shared across the smoke-test suites

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::Settings;
pub use error::{Error, Result};

//! Check-in smoke test - exercises the reservation store and the email
//! notification path as a fixed sequence of labeled steps.
//!
//! Every step failure is captured at the step boundary and accumulated;
//! a final report itemizes the failures. Nothing aborts the run.

pub mod common;
pub mod notify;
pub mod runner;
pub mod store;
pub mod suites;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use runner::{ErrorRecord, RunReport, Runner, StepOutcome};

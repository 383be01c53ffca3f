//! Step runner and error collector
//!
//! Executes labeled steps one at a time, in order. A failing step never
//! aborts the run: its error is captured at the step boundary, tagged with
//! the step label, and appended to the run's error list. After the last
//! step the collected records become a [`RunReport`].
//!
//! The runner makes no attempt to roll back whatever a failed step left
//! behind; later steps run against the resulting state and may fail in
//! cascade, each recorded independently.

use colored::Colorize;
use tracing::debug;

use crate::common::Error;

/// A captured step failure: the step's label plus the underlying error.
#[derive(Debug)]
pub struct ErrorRecord {
    pub message: String,
    pub cause: Error,
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Failed,
}

impl StepOutcome {
    pub fn passed(self) -> bool {
        self == StepOutcome::Passed
    }
}

/// Executes labeled steps and accumulates their failures.
#[derive(Debug, Default)]
pub struct Runner {
    errors: Vec<ErrorRecord>,
    steps_run: usize,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one labeled step.
    ///
    /// Prints the label as a progress line, invokes the action, and on
    /// failure records exactly one [`ErrorRecord`]. Always returns so the
    /// caller can continue with the next step.
    pub fn step(
        &mut self,
        label: &str,
        action: impl FnOnce() -> crate::Result<()>,
    ) -> StepOutcome {
        println!("{}...", label);
        self.steps_run += 1;

        match action() {
            Ok(()) => {
                debug!(step = label, "step passed");
                StepOutcome::Passed
            }
            Err(cause) => {
                debug!(step = label, error = %cause, "step failed");
                self.errors.push(ErrorRecord {
                    message: format!("Failed on {}", label.to_lowercase()),
                    cause,
                });
                StepOutcome::Failed
            }
        }
    }

    /// Record a failure detected before its operation was attempted,
    /// e.g. a missing configuration value.
    pub fn record(&mut self, message: impl Into<String>, cause: Error) {
        let message = message.into();
        debug!(error = %cause, "{}", message);
        self.errors.push(ErrorRecord { message, cause });
    }

    /// Number of failures recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consume the runner and produce the final report.
    pub fn into_report(self) -> RunReport {
        RunReport {
            errors: self.errors,
            steps_run: self.steps_run,
        }
    }
}

/// Aggregate result of one run.
#[derive(Debug)]
pub struct RunReport {
    errors: Vec<ErrorRecord>,
    steps_run: usize,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded failures, in execution order.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    pub fn steps_run(&self) -> usize {
        self.steps_run
    }

    /// Print the success banner, or the failure banner with every record
    /// numbered from 1 in execution order.
    pub fn print(&self) {
        if self.is_success() {
            println!("{}", "Success!".green().bold());
            return;
        }

        println!("{}", ":( There were some errors:".red().bold());
        for (i, record) in self.errors.iter().enumerate() {
            println!("{}", format!("ERROR {}:", i + 1).red());
            println!("    {} Message: {}", ">".red(), record.message);
            println!("    {} Cause: {}", ">".red(), record.cause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn fail(msg: &str) -> crate::Result<()> {
        Err(Error::Internal(msg.to_string()))
    }

    #[test]
    fn test_all_steps_pass() {
        let mut runner = Runner::new();
        assert_eq!(runner.step("first", || Ok(())), StepOutcome::Passed);
        assert_eq!(runner.step("second", || Ok(())), StepOutcome::Passed);

        let report = runner.into_report();
        assert!(report.is_success());
        assert_eq!(report.steps_run(), 2);
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_failure_is_recorded_with_label() {
        let mut runner = Runner::new();
        runner.step("Adding a reservation", || fail("boom"));

        let report = runner.into_report();
        assert!(!report.is_success());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].message, "Failed on adding a reservation");
        assert!(report.errors()[0].cause.to_string().contains("boom"));
    }

    #[test]
    fn test_failure_does_not_stop_later_steps() {
        let mut runner = Runner::new();
        let mut third_ran = false;

        runner.step("first", || fail("one"));
        runner.step("second", || Ok(()));
        runner.step("third", || {
            third_ran = true;
            fail("three")
        });

        assert!(third_ran);
        let report = runner.into_report();
        assert_eq!(report.steps_run(), 3);
        assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn test_errors_keep_execution_order() {
        let mut runner = Runner::new();
        for label in ["a", "b", "c", "d"] {
            runner.step(label, || fail(label));
        }

        let report = runner.into_report();
        let messages: Vec<&str> = report.errors().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Failed on a", "Failed on b", "Failed on c", "Failed on d"]
        );
    }

    #[test]
    fn test_record_without_running_a_step() {
        let mut runner = Runner::new();
        runner.record("There is no from email configured", Error::MissingFromAddress);

        let report = runner.into_report();
        assert_eq!(report.steps_run(), 0);
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].message,
            "There is no from email configured"
        );
    }

    #[test]
    fn test_duplicate_failures_are_not_deduplicated() {
        let mut runner = Runner::new();
        runner.step("flaky", || fail("same"));
        runner.step("flaky", || fail("same"));

        assert_eq!(runner.into_report().errors().len(), 2);
    }
}

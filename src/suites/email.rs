//! Email suite
//!
//! Configuration gaps are recorded without a send being attempted when
//! the send could not possibly work (no from-address); a missing SMTP
//! password is recorded and the send is still attempted so the transport
//! failure shows up as its own record.

use colored::Colorize;
use tracing::info;

use crate::common::config::EmailConfig;
use crate::common::Error;
use crate::notify::Mailer;
use crate::runner::Runner;

/// Run the email suite with the given settings.
pub fn run(runner: &mut Runner, config: &EmailConfig) {
    println!("\n{}", "Testing email...".blue());

    if !config.enabled {
        info!("email sending is disabled; nothing to test");
        return;
    }

    if config.from.is_none() {
        runner.record(
            "There is no from email address configured",
            Error::MissingFromAddress,
        );
        return;
    }

    if config.smtp_auth && config.smtp_password.is_none() {
        runner.record(
            "There is no SMTP password configured",
            Error::MissingSmtpPassword,
        );
        // fall through: the send is attempted anyway and its failure is
        // recorded independently
    }

    let mailer = match Mailer::from_config(config) {
        Ok(mailer) => mailer,
        Err(cause) => {
            runner.record("Failed to configure the mailer", cause);
            return;
        }
    };

    let subject = format!(
        "Reservation check-in test {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    runner.step("Sending a test email", || {
        mailer.send(&subject, "Test email body", None, &config.to)
    });
}

//! Outbound email collaborator
//!
//! Wraps an SMTP transport built from an explicit [`EmailConfig`]; the
//! suite decides what to record when the config is incomplete, this module
//! only knows how to build and send the message.

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

use crate::common::config::EmailConfig;
use crate::common::{Error, Result};

pub struct Mailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from the email settings.
    ///
    /// A missing from-address is a hard configuration error. A missing
    /// password is not: the transport is built without credentials and the
    /// relay's rejection surfaces when sending, so the caller can record
    /// both the configuration gap and the transport failure independently.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let from_addr = config.from.as_deref().ok_or(Error::MissingFromAddress)?;
        let from: Mailbox = from_addr.parse()?;

        let mut builder =
            SmtpTransport::starttls_relay(&config.smtp_host)?.port(config.smtp_port);

        if config.smtp_auth {
            // smtp_user falls back to the from address
            let user = config
                .smtp_user
                .clone()
                .unwrap_or_else(|| from_addr.to_string());
            if let Some(password) = &config.smtp_password {
                builder = builder.credentials(Credentials::new(user, password.clone()));
            }
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Send one message, optionally with an attachment.
    pub fn send(
        &self,
        subject: &str,
        body: &str,
        attachment: Option<&Path>,
        to: &str,
    ) -> Result<()> {
        let message = build_message(&self.from, to, subject, body, attachment)?;
        debug!(to, subject, "sending email");
        self.transport.send(&message)?;
        Ok(())
    }
}

fn build_message(
    from: &Mailbox,
    to: &str,
    subject: &str,
    body: &str,
    attachment: Option<&Path>,
) -> Result<Message> {
    let to: Mailbox = to.parse()?;
    let builder = Message::builder()
        .from(from.clone())
        .to(to)
        .subject(subject);

    let message = match attachment {
        None => builder.body(body.to_string())?,
        Some(path) => {
            let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, &e))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            let content_type = ContentType::parse("application/octet-stream")
                .map_err(|e| Error::Internal(e.to_string()))?;

            builder.multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(Attachment::new(filename).body(bytes, content_type)),
            )?
        }
    };

    Ok(message)
}

//! Contact-form relay: one submission in, one notification email out.

use std::time::Duration;

use askama::Template;
use lettre::message::{Mailbox, MultiPart, SinglePart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::stub::StubTransport;
use lettre::{Address, Message, SmtpTransport, Transport};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use validator::Validate;

use crate::config::Config;

/// One client-originated contact-form payload.
///
/// Created transiently per request, relayed exactly once, never stored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),

    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("mail server did not accept the connection check")]
    NotReady,

    #[error("stub transport error: {0}")]
    Stub(#[from] lettre::transport::stub::Error),
}

#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactHtmlTemplate<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactTextTemplate<'a> {
    submission: &'a ContactSubmission,
}

/// Subject line for a relayed submission.
pub fn subject_for(name: &str) -> String {
    format!("New Message from {name}")
}

#[derive(Clone)]
enum MailTransport {
    Smtp(SmtpTransport),
    Stub {
        transport: StubTransport,
        reachable: bool,
    },
}

/// Sends contact notifications through an authenticated SMTP relay.
///
/// Built once at startup from validated configuration, then cloned into the
/// router state. Each send is a single synchronous attempt; nothing is
/// queued or retried.
#[derive(Clone)]
pub struct Mailer {
    transport: MailTransport,
    from: Mailbox,
    recipient: Mailbox,
}

impl Mailer {
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let credentials = Credentials::new(
            config.smtp.username.clone(),
            config.smtp.password.clone(),
        );

        let transport = SmtpTransport::relay(&config.smtp.host)?
            .port(config.smtp.port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.smtp.timeout_seconds)))
            .build();

        info!(
            smtp_host = %config.smtp.host,
            smtp_port = config.smtp.port,
            recipient = %config.contact.recipient,
            "mailer initialized"
        );

        Ok(Self {
            transport: MailTransport::Smtp(transport),
            from: Mailbox::new(
                Some(config.contact.from_name.clone()),
                config.smtp.username.parse::<Address>()?,
            ),
            recipient: config.contact.recipient.parse()?,
        })
    }

    /// Mailer backed by a recording stub instead of a live SMTP session.
    ///
    /// Intended for tests; sent messages can be read back with
    /// [`Mailer::recorded_messages`].
    pub fn stub() -> Self {
        Self::with_stub(StubTransport::new_ok(), true)
    }

    /// Stub mailer whose transport refuses the connection check, emulating
    /// broken credentials or an unreachable relay.
    pub fn failing_stub() -> Self {
        Self::with_stub(StubTransport::new_error(), false)
    }

    fn with_stub(transport: StubTransport, reachable: bool) -> Self {
        Self {
            transport: MailTransport::Stub {
                transport,
                reachable,
            },
            from: Mailbox::new(
                Some("Monkey Madness".to_string()),
                Address::new("hello", "monkeymadness.in").expect("static address"),
            ),
            recipient: Mailbox::new(
                None,
                Address::new("info", "monkeymadness.in").expect("static address"),
            ),
        }
    }

    /// Check the transport is ready to accept mail, before composing anything.
    pub fn verify(&self) -> Result<(), MailError> {
        match &self.transport {
            MailTransport::Smtp(transport) => match transport.test_connection() {
                Ok(true) => Ok(()),
                Ok(false) => Err(MailError::NotReady),
                Err(err) => Err(err.into()),
            },
            MailTransport::Stub { reachable: true, .. } => Ok(()),
            MailTransport::Stub { .. } => Err(MailError::NotReady),
        }
    }

    /// Relay one submission as a single email: verify, compose, send.
    ///
    /// Any failure is terminal for this attempt; the caller reports it and
    /// the user decides whether to resubmit.
    pub fn send_submission(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        self.verify()?;

        let email = self.compose(submission)?;

        match &self.transport {
            MailTransport::Smtp(transport) => {
                transport.send(&email)?;
            }
            MailTransport::Stub { transport, .. } => {
                transport.send(&email)?;
            }
        }

        info!(
            submitter = %submission.email,
            recipient = %self.recipient,
            "contact notification delivered"
        );

        Ok(())
    }

    fn compose(&self, submission: &ContactSubmission) -> Result<Message, MailError> {
        let plain_body = ContactTextTemplate { submission }.render()?;
        let html_body = ContactHtmlTemplate { submission }.render()?;

        Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .subject(subject_for(&submission.name))
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(plain_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body),
                    ),
            )
            .map_err(MailError::from)
    }

    /// Raw messages accepted by a stub transport, in send order.
    ///
    /// Empty for a live SMTP mailer.
    pub fn recorded_messages(&self) -> Vec<String> {
        match &self.transport {
            MailTransport::Stub { transport, .. } => transport
                .messages()
                .into_iter()
                .map(|(_envelope, message)| message)
                .collect(),
            MailTransport::Smtp(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_subject_interpolates_name_exactly() {
        assert_eq!(subject_for("Ann"), "New Message from Ann");
    }

    #[test]
    fn test_plain_body_layout() {
        let body = ContactTextTemplate {
            submission: &submission(),
        }
        .render()
        .unwrap();

        assert!(body.contains("Name: Ann\nEmail: ann@x.com\nMessage: Hi"));
    }

    // Guards the deliberate no-sanitization behavior: submitted markup is
    // forwarded verbatim into the HTML body. If escaping is ever added,
    // this test must be changed on purpose, not by accident.
    #[test]
    fn test_html_body_keeps_markup_unescaped() {
        let mut submission = submission();
        submission.message = "<b>hi</b>".to_string();

        let body = ContactHtmlTemplate {
            submission: &submission,
        }
        .render()
        .unwrap();

        assert!(body.contains("<b>hi</b>"));
        assert!(!body.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_compose_builds_multipart_message() {
        let mailer = Mailer::stub();
        let email = mailer.compose(&submission()).unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();

        assert!(raw.contains("Subject: New Message from Ann"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_stub_send_records_message() {
        let mailer = Mailer::stub();
        mailer.send_submission(&submission()).unwrap();

        let messages = mailer.recorded_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Subject: New Message from Ann"));
    }

    // Two identical submissions send two separate emails; deduplication is
    // explicitly not part of the contract.
    #[test]
    fn test_duplicate_submissions_send_twice() {
        let mailer = Mailer::stub();
        mailer.send_submission(&submission()).unwrap();
        mailer.send_submission(&submission()).unwrap();

        assert_eq!(mailer.recorded_messages().len(), 2);
    }

    #[test]
    fn test_failing_transport_surfaces_error() {
        let mailer = Mailer::failing_stub();
        let result = mailer.send_submission(&submission());

        assert!(result.is_err());
        assert!(mailer.recorded_messages().is_empty());
    }

    #[test]
    fn test_submission_requires_all_fields() {
        let mut empty_name = submission();
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());

        let mut empty_message = submission();
        empty_message.message = String::new();
        assert!(empty_message.validate().is_err());

        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_submission_rejects_malformed_email() {
        let mut bad_email = submission();
        bad_email.email = "not-an-email".to_string();

        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}

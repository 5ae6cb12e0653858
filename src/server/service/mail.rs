//! Outgoing email.
//!
//! Delivery sits behind the [`Mailer`] trait so services can send mail without knowing
//! whether an SMTP relay is configured. Without `SMTP_HOST` the [`LogMailer`] writes
//! each message to the log instead.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::Config, error::mail::MailError};

/// A plain text email ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    /// Email carrying the link to reset a forgotten password.
    pub fn password_reset(to: &str, app_url: &str, token: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Password reset".to_string(),
            body: format!(
                "You requested a password reset.\n\n\
                 Open the link below within one hour to choose a new password:\n\
                 {}/reset-password/{}\n\n\
                 If you did not request this, you can ignore this email.",
                app_url, token
            ),
        }
    }

    /// Reminder sent to band members before a rehearsal.
    pub fn rehearsal_reminder(
        to: &str,
        first_name: &str,
        band_name: &str,
        title: &str,
        start_time: DateTime<Utc>,
        location: Option<&str>,
    ) -> Self {
        let location = location.unwrap_or("TBD");

        Self {
            to: to.to_string(),
            subject: format!("Rehearsal reminder: {}", title),
            body: format!(
                "Hi {},\n\n\
                 This is a reminder that {} has a rehearsal coming up.\n\n\
                 {}\n\
                 When: {}\n\
                 Where: {}",
                first_name,
                band_name,
                title,
                start_time.format("%A, %B %-d %Y at %H:%M UTC"),
                location
            ),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Sends mail through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
        from: &str,
    ) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from: from.parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport.send(message).await?;

        Ok(())
    }
}

/// Writes emails to the log instead of delivering them.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        tracing::info!(
            "Email to {} (not sent, SMTP not configured)\nSubject: {}\n\n{}",
            email.to,
            email.subject,
            email.body
        );

        Ok(())
    }
}

/// Picks the SMTP mailer when a relay is configured, otherwise the logging mailer.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, MailError> {
    match &config.smtp {
        Some(smtp) => {
            let credentials = smtp.username.clone().zip(smtp.password.clone());
            tracing::info!("Sending email through SMTP relay {}:{}", smtp.host, smtp.port);

            Ok(Arc::new(SmtpMailer::new(
                &smtp.host,
                smtp.port,
                credentials,
                &config.mail_from,
            )?))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, emails will be logged instead of sent");

            Ok(Arc::new(LogMailer))
        }
    }
}

/// Mailer that keeps every email in memory. Recipients listed in `failing` are rejected.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: tokio::sync::Mutex<Vec<Email>>,
    pub failing: Vec<String>,
}

#[cfg(test)]
impl RecordingMailer {
    pub fn failing_for(recipients: &[&str]) -> Self {
        Self {
            sent: Default::default(),
            failing: recipients.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub async fn sent(&self) -> Vec<Email> {
        self.sent.lock().await.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        if self.failing.contains(&email.to) {
            let err = "not a mailbox".parse::<lettre::Address>().unwrap_err();
            return Err(MailError::Address(err));
        }

        self.sent.lock().await.push(email);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reset_email_links_to_the_app() {
        let email = Email::password_reset("a@example.com", "https://band.example", "abc.def");

        assert_eq!(email.to, "a@example.com");
        assert!(email
            .body
            .contains("https://band.example/reset-password/abc.def"));
    }

    #[test]
    fn reminder_email_defaults_location() {
        let start = Utc.with_ymd_and_hms(2026, 3, 6, 19, 30, 0).unwrap();
        let email = Email::rehearsal_reminder(
            "a@example.com",
            "Ana",
            "The Tuesdays",
            "Full run-through",
            start,
            None,
        );

        assert_eq!(email.subject, "Rehearsal reminder: Full run-through");
        assert!(email.body.contains("Hi Ana"));
        assert!(email.body.contains("Friday, March 6 2026 at 19:30 UTC"));
        assert!(email.body.contains("Where: TBD"));
    }

    #[test]
    fn rejects_invalid_sender() {
        let result = SmtpMailer::new("localhost", 25, None, "not an address");

        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        let result = LogMailer
            .send(Email::password_reset("a@example.com", "http://x", "t"))
            .await;

        assert!(result.is_ok());
    }
}

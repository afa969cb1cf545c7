//! Email service for contact-form notifications.
//!
//! Uses `lettre` for SMTP transport. Dispatch is best-effort: a contact
//! submission must succeed even when SMTP is unconfigured or the relay is
//! down, so callers log failures instead of propagating them.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use thiserror::Error;

/// Email (SMTP) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host. Empty means email is disabled.
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username. Empty means email is disabled.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address. Falls back to the SMTP username when empty.
    #[serde(default)]
    pub from_email: String,
    /// Recipient for contact-form notifications. Falls back to the SMTP
    /// username when empty.
    #[serde(default)]
    pub contact_email: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: String::new(),
            contact_email: String::new(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP host or username missing.
    #[error("SMTP is not configured")]
    NotConfigured,
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A contact-form submission, as passed to the notification email.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Submitter phone, if provided.
    pub phone: Option<String>,
    /// Message body.
    pub message: String,
}

/// Email service for transactional mail.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// True when SMTP host and username are both set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.config.smtp_host.is_empty() && !self.config.smtp_username.is_empty()
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Sends a notification email for a contact-form submission.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::NotConfigured` when SMTP is unset, or a build or
    /// send error otherwise. Callers treat all of these as non-fatal.
    pub async fn send_contact_notification(
        &self,
        contact: &ContactNotification,
    ) -> Result<(), EmailError> {
        if !self.is_configured() {
            return Err(EmailError::NotConfigured);
        }

        let subject = format!("New Contact Form Submission from {}", contact.name);
        let body = format!(
            r"<h2>New Contact Form Submission</h2>
<p><strong>Name:</strong> {}</p>
<p><strong>Email:</strong> {}</p>
<p><strong>Phone:</strong> {}</p>
<p><strong>Message:</strong></p>
<p>{}</p>",
            contact.name,
            contact.email,
            contact.phone.as_deref().unwrap_or("Not provided"),
            contact.message,
        );

        self.send_email(&self.recipient(), &subject, &body).await
    }

    /// Sends an HTML email.
    ///
    /// # Errors
    ///
    /// Returns an error if the email cannot be built or sent.
    pub async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let from = self.sender();

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| EmailError::BuildError(e.to_string()))?;

        let transport = self.create_transport()?;
        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        Ok(())
    }

    fn sender(&self) -> String {
        if self.config.from_email.is_empty() {
            self.config.smtp_username.clone()
        } else {
            self.config.from_email.clone()
        }
    }

    fn recipient(&self) -> String {
        if self.config.contact_email.is_empty() {
            self.config.smtp_username.clone()
        } else {
            self.config.contact_email.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        let service = EmailService::new(EmailConfig::default());
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_send_fails_fast() {
        let service = EmailService::new(EmailConfig::default());
        let contact = ContactNotification {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
            message: "hi".to_string(),
        };

        let result = service.send_contact_notification(&contact).await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }

    #[test]
    fn test_recipient_falls_back_to_username() {
        let service = EmailService::new(EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: "relay@example.com".to_string(),
            ..EmailConfig::default()
        });
        assert_eq!(service.recipient(), "relay@example.com");
        assert_eq!(service.sender(), "relay@example.com");
    }

    #[test]
    fn test_explicit_contact_recipient() {
        let service = EmailService::new(EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: "relay@example.com".to_string(),
            contact_email: "sales@stoneline.test".to_string(),
            from_email: "noreply@stoneline.test".to_string(),
            ..EmailConfig::default()
        });
        assert_eq!(service.recipient(), "sales@stoneline.test");
        assert_eq!(service.sender(), "noreply@stoneline.test");
    }
}

use derive_more::Display;
use lettre::{
    message::header::ContentType,
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{entities::contact::ContactMessage, settings::AppConfig};

#[derive(Debug, Display)]
pub enum MailerError {
    #[display("SMTP error: {_0}")]
    Smtp(SmtpError),

    #[display("Failed to build message: {_0}")]
    MessageBuild(lettre::error::Error),

    #[display("Invalid email address: {_0}")]
    InvalidAddress(String),
}

impl From<SmtpError> for MailerError {
    fn from(err: SmtpError) -> Self {
        MailerError::Smtp(err)
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::MessageBuild(err)
    }
}

/// Outbound notification channel for contact submissions. Built only when
/// mail credentials are configured; callers treat delivery as best-effort.
#[derive(Clone)]
pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    to_address: String,
}

impl EmailNotifier {
    /// Returns `None` when the config carries no mail credentials, in which
    /// case the notification step is skipped entirely.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, MailerError> {
        let (Some(user), Some(password)) = (&config.email_user, &config.email_password) else {
            return Ok(None);
        };

        let credentials = Credentials::new(user.clone(), password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .credentials(credentials)
            .build();

        Ok(Some(EmailNotifier {
            mailer,
            from_address: user.clone(),
            to_address: config.email_notify_to.clone().unwrap_or_else(|| user.clone()),
        }))
    }

    pub async fn send_contact_notification(
        &self,
        message: &ContactMessage,
    ) -> Result<(), MailerError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| MailerError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .to_address
                .parse()
                .map_err(|_| MailerError::InvalidAddress(self.to_address.clone()))?)
            .subject(format!("Portfolio Contact: {}", message.subject))
            .header(ContentType::TEXT_HTML)
            .body(notification_body(message))?;

        self.mailer.send(email).await?;

        tracing::info!(to = %self.to_address, "Contact notification email sent");
        Ok(())
    }
}

fn notification_body(message: &ContactMessage) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        message.name, message.email, message.subject, message.message
    )
}

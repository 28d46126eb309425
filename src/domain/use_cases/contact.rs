use validator::Validate;

use crate::{
    entities::contact::{ContactMessage, NewContactMessage},
    errors::AppError,
    infrastructure::email::mailer::EmailNotifier,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
    pub notifier: Option<EmailNotifier>,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R, notifier: Option<EmailNotifier>) -> Self {
        ContactHandler {
            contact_repo,
            notifier,
        }
    }

    /// Validates and persists a submission, then kicks off the email
    /// notification. Only the persistence step decides the outcome; the
    /// notification is fire-and-forget and its failure is only logged.
    pub async fn submit_contact_message(
        &self,
        request: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let stored = self.contact_repo.create_contact_message(&request).await?;

        if let Some(notifier) = &self.notifier {
            let notifier = notifier.clone();
            let message = stored.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.send_contact_notification(&message).await {
                    tracing::warn!("Contact notification email failed: {}", e);
                }
            });
        }

        Ok(stored)
    }

    /// Lists all stored messages, newest first.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }
}

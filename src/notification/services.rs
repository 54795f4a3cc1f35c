//! Notification orchestration.

use super::{
    domain::{EmailMessage, NotificationResult, SmsMessage},
    ports::NotificationSender,
};
use std::sync::Arc;

/// Validates notification requests and hands them to a sender.
#[derive(Clone)]
pub struct NotificationService<S>
where
    S: NotificationSender,
{
    sender: Arc<S>,
}

impl<S> NotificationService<S>
where
    S: NotificationSender,
{
    /// Creates a service dispatching through `sender`.
    #[must_use]
    pub const fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// Sends one email.
    ///
    /// # Errors
    ///
    /// Returns [`super::domain::NotificationError::Blank`] for a blank field
    /// or the sender's delivery error.
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> NotificationResult<()> {
        let message = EmailMessage::new(recipient, subject, body)?;
        self.deliver_email(&message).await
    }

    /// Sends one text message.
    ///
    /// # Errors
    ///
    /// Returns [`super::domain::NotificationError::Blank`] for a blank field
    /// or the sender's delivery error.
    pub async fn send_sms(&self, phone_number: &str, body: &str) -> NotificationResult<()> {
        let message = SmsMessage::new(phone_number, body)?;
        self.deliver_sms(&message).await
    }

    /// Sends the same body as an email and then as a text message.
    ///
    /// Every field is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`super::domain::NotificationError::Blank`] for a blank field
    /// or the first delivery error. A failed email stops the text message.
    pub async fn send_combined(
        &self,
        recipient: &str,
        phone_number: &str,
        subject: &str,
        body: &str,
    ) -> NotificationResult<()> {
        let email = EmailMessage::new(recipient, subject, body)?;
        let sms = SmsMessage::new(phone_number, body)?;

        tracing::info!(recipient, phone_number, "sending combined notification");
        self.deliver_email(&email).await?;
        self.deliver_sms(&sms).await?;
        tracing::info!(recipient, phone_number, "combined notification sent");
        Ok(())
    }

    async fn deliver_email(&self, message: &EmailMessage) -> NotificationResult<()> {
        self.sender.send_email(message).await.inspect_err(|err| {
            tracing::error!(recipient = message.recipient(), error = %err, "email delivery failed");
        })
    }

    async fn deliver_sms(&self, message: &SmsMessage) -> NotificationResult<()> {
        self.sender.send_sms(message).await.inspect_err(|err| {
            tracing::error!(
                phone_number = message.phone_number(),
                error = %err,
                "sms delivery failed"
            );
        })
    }
}

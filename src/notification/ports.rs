//! Delivery port for notifications.

use super::domain::{EmailMessage, NotificationResult, SmsMessage};
use async_trait::async_trait;

/// Transport capable of delivering validated messages.
///
/// Dropping a returned future abandons delivery.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Delivers an email.
    async fn send_email(&self, message: &EmailMessage) -> NotificationResult<()>;

    /// Delivers a text message.
    async fn send_sms(&self, message: &SmsMessage) -> NotificationResult<()>;
}

//! Simulated delivery that only records messages in the trace log.

use async_trait::async_trait;
use std::time::Duration;

use crate::notification::{
    domain::{EmailMessage, NotificationResult, SmsMessage},
    ports::NotificationSender,
};

/// Sender that waits for a fixed latency and logs each message.
#[derive(Debug, Clone, Copy)]
pub struct TracingNotificationSender {
    delay: Duration,
}

impl TracingNotificationSender {
    /// Creates a sender with the given simulated latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl NotificationSender for TracingNotificationSender {
    async fn send_email(&self, message: &EmailMessage) -> NotificationResult<()> {
        tracing::info!(
            recipient = message.recipient(),
            subject = message.subject(),
            "sending email notification"
        );
        tokio::time::sleep(self.delay).await;
        tracing::info!(recipient = message.recipient(), "email notification sent");
        Ok(())
    }

    async fn send_sms(&self, message: &SmsMessage) -> NotificationResult<()> {
        tracing::info!(
            phone_number = message.phone_number(),
            "sending sms notification"
        );
        tokio::time::sleep(self.delay).await;
        tracing::info!(phone_number = message.phone_number(), "sms notification sent");
        Ok(())
    }
}

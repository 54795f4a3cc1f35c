//! Validated notification messages.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building or delivering notifications.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// A required message field was empty or whitespace.
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// The transport failed to deliver the message.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a transport failure.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// An email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    recipient: String,
    subject: String,
    body: String,
}

impl EmailMessage {
    /// Builds an email, rejecting blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Blank`] naming the first blank field.
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> NotificationResult<Self> {
        Ok(Self {
            recipient: require("recipient", recipient.into())?,
            subject: require("subject", subject.into())?,
            body: require("message", body.into())?,
        })
    }

    /// Returns the destination address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    phone_number: String,
    body: String,
}

impl SmsMessage {
    /// Builds a text message, rejecting blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Blank`] naming the first blank field.
    pub fn new(
        phone_number: impl Into<String>,
        body: impl Into<String>,
    ) -> NotificationResult<Self> {
        Ok(Self {
            phone_number: require("phone number", phone_number.into())?,
            body: require("message", body.into())?,
        })
    }

    /// Returns the destination number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

fn require(field: &'static str, value: String) -> NotificationResult<String> {
    if value.trim().is_empty() {
        return Err(NotificationError::Blank(field));
    }
    Ok(value)
}

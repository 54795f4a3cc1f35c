//! Notification sender implementations.

mod logging;

pub use logging::TracingNotificationSender;

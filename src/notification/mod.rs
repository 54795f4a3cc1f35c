//! Email and SMS notifications about tasks.
//!
//! Messages are validated on construction, dispatched through the
//! [`ports::NotificationSender`] port, and orchestrated by
//! [`services::NotificationService`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

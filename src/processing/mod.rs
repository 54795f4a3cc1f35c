//! Text transformations applied to task content.
//!
//! [`services::TaskTextProcessor`] rewrites task text in one of the
//! [`domain::TextProcessingMode`]s and can persist the result through the
//! [`ports::TaskOutputWriter`] port.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

//! Task lifecycle management.
//!
//! This module implements creating tasks, editing their details, priority,
//! and due date, moving them between statuses, deleting them, and listing the
//! active ones. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command and query handlers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

//! Task priority value type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a task, ordered from least to most urgent.
///
/// Ordering follows [`Priority::ordinal`], so `Priority::Low <
/// Priority::Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Critical,
}

impl Priority {
    /// All priorities in ascending ordinal order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Parses a priority from its name, ignoring case and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriorityName`] carrying the original
    /// input when it is blank or matches no priority.
    pub fn from_name(name: &str) -> Result<Self, TaskDomainError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(TaskDomainError::InvalidPriorityName(name.to_owned())),
        }
    }

    /// Maps an ordinal in `1..=4` to its priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriorityOrdinal`] for values outside
    /// `1..=4`.
    pub const fn from_ordinal(ordinal: i64) -> Result<Self, TaskDomainError> {
        match ordinal {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Critical),
            _ => Err(TaskDomainError::InvalidPriorityOrdinal(ordinal)),
        }
    }

    /// Returns the urgency rank, `1` for Low up to `4` for Critical.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Returns the canonical display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl FromStr for Priority {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Call-volume requirements consumed by the staffing planner.

use serde::{Deserialize, Serialize};

/// Hours in a planning day.
pub const HOURS_PER_DAY: u32 = 24;

/// Validation failure for a single requirement or the requirements file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementError {
    #[error("CSV file is missing a header row.")]
    MissingHeader,

    #[error("Expected column '{expected}' at position {position}, but got '{found}'")]
    UnexpectedColumn {
        expected: &'static str,
        position: usize,
        found: String,
    },

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("end_hour must be > start_hour (start={start}, end={end})")]
    EmptyWindow { start: u32, end: u32 },

    #[error("Failed to read requirements file: {0}")]
    Io(String),
}

/// One customer's expected call volume over a window of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequirement {
    pub customer_name: String,
    pub avg_duration_sec: u32,
    /// Inclusive start hour, 0..=23.
    pub start_hour: u32,
    /// Exclusive end hour, 1..=24.
    pub end_hour: u32,
    pub total_calls: u32,
    /// 1 (highest) to 5.
    pub priority: u8,
}

impl CallRequirement {
    /// Build a validated requirement.
    pub fn new(
        customer_name: impl Into<String>,
        avg_duration_sec: u32,
        start_hour: u32,
        end_hour: u32,
        total_calls: u32,
        priority: u8,
    ) -> Result<Self, RequirementError> {
        if avg_duration_sec == 0 {
            return Err(RequirementError::InvalidField {
                field: "avg_duration_sec",
                value: avg_duration_sec.to_string(),
            });
        }
        if start_hour >= HOURS_PER_DAY {
            return Err(RequirementError::InvalidField {
                field: "start_hour",
                value: start_hour.to_string(),
            });
        }
        if end_hour > HOURS_PER_DAY {
            return Err(RequirementError::InvalidField {
                field: "end_hour",
                value: end_hour.to_string(),
            });
        }
        if end_hour <= start_hour {
            return Err(RequirementError::EmptyWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        if total_calls == 0 {
            return Err(RequirementError::InvalidField {
                field: "total_calls",
                value: total_calls.to_string(),
            });
        }
        if !(1..=5).contains(&priority) {
            return Err(RequirementError::InvalidField {
                field: "priority",
                value: priority.to_string(),
            });
        }

        Ok(Self {
            customer_name: customer_name.into(),
            avg_duration_sec,
            start_hour,
            end_hour,
            total_calls,
            priority,
        })
    }

    pub fn active_duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Calls spread evenly across the active window.
    pub fn calls_per_hour(&self) -> f64 {
        match self.active_duration_hours() {
            0 => 0.0,
            hours => f64::from(self.total_calls) / f64::from(hours),
        }
    }
}

//! Parsers for staffing schedule input formats.
//!
//! Two interchangeable formats normalize into the same canonical
//! [`Schedule`](crate::models::Schedule):
//!
//! - [`csv_parser`]: `hour,total_agents,<customer>...` tables
//! - [`json_parser`]: arrays of `{hour, total_agents, breakdown}` objects
//!
//! [`requirements_parser`] reads the call-requirements CSV consumed by the
//! staffing planner.
//!
//! # Example
//!
//! ```
//! use staffing_grid::parsing::{load_from_text, InputFormat};
//!
//! let schedule = load_from_text("hour,total_agents,A\n0,5,5\n", InputFormat::Csv)
//!     .expect("valid CSV");
//! assert_eq!(schedule.len(), 1);
//! ```

pub mod csv_parser;
pub mod error;
pub mod json_parser;
pub mod numeric;
pub mod requirements_parser;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use csv_parser::parse_schedule_csv;
pub use error::{FormatError, FormatResult};
pub use json_parser::{parse_schedule_json_str, parse_schedule_json_value};
pub use requirements_parser::{parse_requirements_csv, parse_requirements_file};

use crate::models::Schedule;

/// Declared type of a schedule payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Infer the format from the text after the last `.` (case-insensitive).
    /// A bare `.csv` counts.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        extension.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(FormatError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse raw text of the given format into a canonical schedule.
///
/// This is the single entry point used by the dashboard and the HTTP layer. Nothing
/// is committed anywhere on failure; the caller decides what to replace.
pub fn load_from_text(content: &str, format: InputFormat) -> FormatResult<Schedule> {
    match format {
        InputFormat::Csv => parse_schedule_csv(content),
        InputFormat::Json => parse_schedule_json_str(content),
    }
}

//! Three-level intensity bands used to color grid cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ratio below which a cell is [`Band::Low`].
pub const LOW_CUTOFF: f64 = 0.33;
/// Ratio below which a cell is [`Band::Medium`]; at or above it is [`Band::High`].
pub const MEDIUM_CUTOFF: f64 = 0.67;

/// Intensity class of a cell. Serializes to its CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn css_class(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Classify `agents` relative to the schedule maximum.
///
/// With `max == 0` every value is [`Band::Low`]. Otherwise the ratio is compared
/// against half-open ranges `[0, 0.33)`, `[0.33, 0.67)` and `[0.67, ..)`.
pub fn classify(agents: u32, max: u32) -> Band {
    if max == 0 {
        return Band::Low;
    }

    let ratio = f64::from(agents) / f64::from(max);
    if ratio < LOW_CUTOFF {
        Band::Low
    } else if ratio < MEDIUM_CUTOFF {
        Band::Medium
    } else {
        Band::High
    }
}

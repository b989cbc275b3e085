use serde_json::Value;
use tracing::debug;

use super::error::{FormatError, FormatResult};
use super::numeric::{clamp_count, coerce_count};
use crate::models::{Breakdown, Schedule};

/// Parse schedule JSON text into a canonical [`Schedule`].
///
/// # Errors
///
/// - [`FormatError::InvalidJson`] if the text is not JSON.
/// - [`FormatError::InvalidTopLevelShape`] if the top-level value is not an array.
pub fn parse_schedule_json_str(content: &str) -> FormatResult<Schedule> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| FormatError::InvalidJson(e.to_string()))?;
    parse_schedule_json_value(&value)
}

/// Parse an already-decoded JSON value into a canonical [`Schedule`].
///
/// Expected shape:
///
/// ```json
/// [{"hour": 0, "total_agents": 5, "breakdown": {"Acme": 3, "Globex": 2}}]
/// ```
///
/// Elements are not validated beyond the top-level array. Missing or falsy `hour`
/// and `total_agents` become 0, a missing or non-object `breakdown` becomes empty,
/// and non-numeric values are coerced (see [`coerce_json_count`]). An element that is
/// not an object yields an all-default slot.
pub fn parse_schedule_json_value(value: &Value) -> FormatResult<Schedule> {
    let items = value.as_array().ok_or(FormatError::InvalidTopLevelShape)?;

    let mut schedule = Schedule::new();
    for item in items {
        let hour = item.get("hour").map(coerce_json_count).unwrap_or(0);
        let total_agents = item.get("total_agents").map(coerce_json_count).unwrap_or(0);
        let breakdown: Breakdown = match item.get("breakdown") {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(customer, agents)| (customer.as_str(), coerce_json_count(agents)))
                .collect(),
            _ => Breakdown::new(),
        };
        schedule.push(hour, total_agents, breakdown);
    }

    debug!("Parsed schedule JSON: {} slots", schedule.len());
    Ok(schedule)
}

/// Coerce a JSON value to a non-negative count.
///
/// Numbers truncate toward zero, strings use the leading-integer rule of the CSV
/// reader, negatives clamp to 0 and every other value is 0.
pub fn coerce_json_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                clamp_count(v)
            } else if let Some(v) = n.as_u64() {
                u32::try_from(v).unwrap_or(u32::MAX)
            } else {
                // Float: `as` saturates and maps NaN to 0.
                n.as_f64().map(|f| f.trunc().max(0.0) as u32).unwrap_or(0)
            }
        }
        Value::String(s) => coerce_count(s),
        _ => 0,
    }
}

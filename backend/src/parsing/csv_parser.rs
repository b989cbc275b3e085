use tracing::debug;

use super::error::{FormatError, FormatResult};
use super::numeric::{coerce_count, parse_leading_int};
use crate::models::{Breakdown, Schedule};

/// Index of the first customer column; the two before it are `hour` and `total_agents`.
const FIRST_CUSTOMER_COLUMN: usize = 2;

/// Parse schedule CSV text into a canonical [`Schedule`].
///
/// The header names the columns: `hour, total_agents, <customer>, <customer>, ...`.
/// Rows whose field count differs from the header are dropped without notice.
/// Numeric cells coerce to 0 when unreadable; customer cells that end up at 0 are
/// left out of the breakdown.
///
/// # Errors
///
/// [`FormatError::MissingHeaderOrData`] when the trimmed content has fewer than two
/// lines.
pub fn parse_schedule_csv(content: &str) -> FormatResult<Schedule> {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(FormatError::MissingHeaderOrData);
    }

    let headers = split_fields(lines[0]);
    let mut schedule = Schedule::new();
    let mut skipped = 0usize;

    for line in &lines[1..] {
        let values = split_fields(line);
        if values.len() != headers.len() {
            skipped += 1;
            continue;
        }

        // An unreadable hour falls back to the number of slots produced so far.
        let fallback_hour = schedule.len() as u32;
        let hour = values
            .first()
            .and_then(|v| parse_leading_int(v))
            .and_then(|h| u32::try_from(h).ok())
            .unwrap_or(fallback_hour);
        let total_agents = values.get(1).map(|v| coerce_count(v)).unwrap_or(0);

        let breakdown: Breakdown = headers
            .iter()
            .zip(values.iter())
            .skip(FIRST_CUSTOMER_COLUMN)
            .map(|(customer, value)| (*customer, coerce_count(value)))
            .collect();

        schedule.push(hour, total_agents, breakdown);
    }

    debug!(
        "Parsed schedule CSV: {} slots, {} customer columns, {} rows skipped",
        schedule.len(),
        headers.len().saturating_sub(FIRST_CUSTOMER_COLUMN),
        skipped
    );

    Ok(schedule)
}

/// Split one line on commas and trim every field. No quoting is recognised.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

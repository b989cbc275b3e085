//! Lenient integer coercion shared by the schedule parsers.
//!
//! Cells are read the way a spreadsheet user expects: leading whitespace is skipped,
//! an optional sign is honored, and everything after the leading digits is ignored.
//! `"07:00"` reads as 7, `"12 agents"` as 12, `"n/a"` as nothing.

/// Parse the leading integer of `text`, or `None` when it does not start with digits.
///
/// Values too large for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Clamp a parsed value into the agent-count range.
pub fn clamp_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Coerce a cell to an agent count: unparseable and negative values become 0.
pub fn coerce_count(text: &str) -> u32 {
    parse_leading_int(text).map(clamp_count).unwrap_or(0)
}

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Label shown for a grid position: zero-padded index followed by `:00`.
pub fn hour_label(position: usize) -> String {
    format!("{:02}:00", position)
}

const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Extract the hour of day from a loosely formatted time string.
///
/// Accepts bare integers in `0..=24`, 24-hour and 12-hour clock times (`14:30`,
/// `2:30 PM`, `1pm`), and date-times (`2024-11-30 15:45`). Minutes are discarded.
pub fn parse_hour_of_day(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse::<u32>().ok().filter(|h| *h <= 24);
    }

    let upper = text.to_ascii_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
        .map(|t| t.hour())
        .or_else(|| parse_bare_meridiem(&upper))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&upper, fmt).ok())
                .map(|dt| dt.hour())
        })
}

/// `1PM`, `11 am`: an hour with a meridiem but no minutes.
fn parse_bare_meridiem(upper: &str) -> Option<u32> {
    let (digits, pm) = if let Some(d) = upper.strip_suffix("PM") {
        (d, true)
    } else if let Some(d) = upper.strip_suffix("AM") {
        (d, false)
    } else {
        return None;
    };
    let hour = digits.trim().parse::<u32>().ok().filter(|h| (1..=12).contains(h))?;
    Some(hour % 12 + if pm { 12 } else { 0 })
}

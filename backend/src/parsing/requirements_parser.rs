use std::fs;
use std::path::Path;

use csv::Trim;
use tracing::{debug, warn};

use crate::models::{parse_hour_of_day, CallRequirement, RequirementError, HOURS_PER_DAY};

/// Columns every requirements file must start with, in order.
pub const EXPECTED_COLUMNS: [&str; 6] = [
    "CustomerName",
    "AverageCallDurationSeconds",
    "StartTimePT",
    "EndTimePT",
    "NumberOfCalls",
    "Priority",
];

/// Check the header row against [`EXPECTED_COLUMNS`]. Extra trailing columns are
/// allowed; surrounding whitespace is ignored.
pub fn validate_columns(header: Option<&[&str]>) -> Result<(), RequirementError> {
    let header = header.ok_or(RequirementError::MissingHeader)?;
    for (position, expected) in EXPECTED_COLUMNS.iter().enumerate() {
        match header.get(position) {
            Some(found) if found.trim() == *expected => {}
            found => {
                return Err(RequirementError::UnexpectedColumn {
                    expected,
                    position,
                    found: found.map(|f| f.to_string()).unwrap_or_else(|| "N/A".to_string()),
                })
            }
        }
    }
    Ok(())
}

/// Parse call requirements from CSV text.
///
/// Fields may be quoted, so a customer name can carry commas. Header problems abort
/// the whole parse. Rows that are short or fail validation are skipped with a
/// warning, so one bad line never hides the rest of the file.
pub fn parse_requirements_csv(content: &str) -> Result<Vec<CallRequirement>, RequirementError> {
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let header = reader.headers().ok().filter(|h| !h.is_empty()).cloned();
    let columns: Option<Vec<&str>> = header.as_ref().map(|h| h.iter().collect());
    validate_columns(columns.as_deref())?;

    let mut requirements = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", row_idx, e);
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < EXPECTED_COLUMNS.len() {
            warn!("Skipping invalid or incomplete row {}", row_idx);
            continue;
        }

        match parse_row(&fields) {
            Ok(requirement) => requirements.push(requirement),
            Err(e) => warn!("Error parsing row {}: {}", row_idx, e),
        }
    }

    debug!("Parsed {} call requirements", requirements.len());
    Ok(requirements)
}

/// Read and parse a requirements file.
pub fn parse_requirements_file(path: &Path) -> Result<Vec<CallRequirement>, RequirementError> {
    let content = fs::read_to_string(path)
        .map_err(|e| RequirementError::Io(format!("{}: {}", path.display(), e)))?;
    parse_requirements_csv(&content)
}

fn parse_row(fields: &[&str]) -> Result<CallRequirement, RequirementError> {
    let duration = parse_field::<u32>("avg_duration_sec", fields[1])?;
    let start = parse_time(fields[2])?;
    let mut end = parse_time(fields[3])?;
    // Midnight as an end time closes the day.
    if end == 0 {
        end = HOURS_PER_DAY;
    }
    let calls = parse_field::<u32>("total_calls", fields[4])?;
    let priority = parse_field::<u8>("priority", fields[5])?;

    CallRequirement::new(fields[0], duration, start, end, calls, priority)
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, RequirementError> {
    value.parse::<T>().map_err(|_| RequirementError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_time(value: &str) -> Result<u32, RequirementError> {
    parse_hour_of_day(value).ok_or_else(|| RequirementError::InvalidTime(value.to_string()))
}

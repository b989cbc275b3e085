//! Text, JSON and CSV renderings of a schedule.
//!
//! JSON and CSV output read back through the schedule parsers. Unlike the grid, the
//! exporters label rows with each slot's own `hour` value.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Breakdown, Schedule};

/// Directory used by [`write_csv`] when no path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output formats for exported schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    pub fn render(&self, schedule: &Schedule) -> Result<String, ExportError> {
        match self {
            ExportFormat::Text => Ok(to_text(schedule)),
            ExportFormat::Json => to_json(schedule),
            ExportFormat::Csv => Ok(to_csv(schedule)),
        }
    }
}

fn clock_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// One line per slot: `09:00 total=5; Acme=3, Globex=2`.
///
/// Slots without a breakdown print as `HH:00 total=0; none`.
pub fn to_text(schedule: &Schedule) -> String {
    let mut out = String::new();
    for slot in schedule {
        let parts: Vec<String> = slot
            .breakdown
            .iter()
            .map(|e| format!("{}={}", e.customer, e.agents))
            .collect();

        if parts.is_empty() {
            out.push_str(&format!("{} total=0; none\n", clock_hour(slot.hour)));
        } else {
            out.push_str(&format!(
                "{} total={}; {}\n",
                clock_hour(slot.hour),
                slot.total_agents,
                parts.join(", ")
            ));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonRow<'a> {
    hour: u32,
    total_agents: u32,
    breakdown: &'a Breakdown,
}

/// Pretty-printed `[{hour, total_agents, breakdown}]` array.
pub fn to_json(schedule: &Schedule) -> Result<String, ExportError> {
    let rows: Vec<JsonRow<'_>> = schedule
        .iter()
        .map(|slot| JsonRow {
            hour: slot.hour,
            total_agents: slot.total_agents,
            breakdown: &slot.breakdown,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// `hour,total_agents,<customers...>` with customers sorted by name.
///
/// Hours are written as `HH:00`; a customer absent from a slot is written as `0`.
pub fn to_csv(schedule: &Schedule) -> String {
    let mut customers = schedule.customers();
    customers.sort_unstable();

    let mut header = vec!["hour", "total_agents"];
    header.extend(customers.iter().copied());

    let mut out = header.join(",");
    out.push('\n');

    for slot in schedule {
        let mut row = vec![clock_hour(slot.hour), slot.total_agents.to_string()];
        row.extend(
            customers
                .iter()
                .map(|c| slot.breakdown.get(c).unwrap_or(0).to_string()),
        );
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// `outputs/schedule_<YYYYmmdd_HHMMSS>.csv` for the given moment.
pub fn default_csv_path(now: NaiveDateTime) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(format!("schedule_{}.csv", now.format("%Y%m%d_%H%M%S")))
}

/// Write the CSV export to `output`, or to a timestamped file under
/// [`DEFAULT_OUTPUT_DIR`]. Parent directories are created. Returns the path written.
pub fn write_csv(schedule: &Schedule, output: Option<&Path>) -> Result<PathBuf, ExportError> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_csv_path(Local::now().naive_local()),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, to_csv(schedule)).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("CSV output saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.push(9, 5, [("Globex", 2), ("Acme", 3)].into_iter().collect());
        schedule.push(10, 0, Breakdown::new());
        schedule
    }

    #[test]
    fn test_to_text() {
        assert_eq!(
            to_text(&sample()),
            "09:00 total=5; Globex=2, Acme=3\n10:00 total=0; none\n"
        );
    }

    #[test]
    fn test_to_text_empty_breakdown_prints_zero_total() {
        let mut schedule = Schedule::new();
        schedule.push(3, 4, Breakdown::new());
        assert_eq!(to_text(&schedule), "03:00 total=0; none\n");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"hour": 9, "total_agents": 5, "breakdown": {"Globex": 2, "Acme": 3}},
                {"hour": 10, "total_agents": 0, "breakdown": {}}
            ])
        );
        assert!(json.contains("\n  {"), "expected two-space indentation");
    }

    #[test]
    fn test_to_csv() {
        assert_eq!(
            to_csv(&sample()),
            "hour,total_agents,Acme,Globex\n09:00,5,3,2\n10:00,0,0,0\n"
        );
    }

    #[test]
    fn test_to_csv_empty_schedule() {
        assert_eq!(to_csv(&Schedule::new()), "hour,total_agents\n");
    }

    #[test]
    fn test_default_csv_path() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(10, 22, 2)
            .unwrap();
        assert_eq!(
            default_csv_path(now),
            Path::new("outputs").join("schedule_20251201_102202.csv")
        );
    }

    #[test]
    fn test_write_csv_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("day.csv");

        let written = write_csv(&sample(), Some(target.as_path())).unwrap();

        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), to_csv(&sample()));
    }

    #[test]
    fn test_export_format_names() {
        let csv: ExportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(csv, ExportFormat::Csv);
        assert!(serde_json::from_str::<ExportFormat>("\"xml\"").is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }
}

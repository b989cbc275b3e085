//! Data Transfer Objects for the HTTP API.
//!
//! Receipts, detail views and the surface itself already derive `Serialize` and are
//! re-exported from the service layer.

use serde::{Deserialize, Serialize};

use crate::parsing::InputFormat;
pub use crate::services::{DetailView, ExportFormat, LoadReceipt, MemorySurface};

/// Request body for loading a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadScheduleRequest {
    /// Raw CSV or JSON text
    pub content: String,
    /// Declared format; takes precedence over `file_name`
    #[serde(default)]
    pub format: Option<InputFormat>,
    /// Original file name, used for display and to infer the format
    #[serde(default)]
    pub file_name: Option<String>,
}

impl LoadScheduleRequest {
    /// Declared format, else the one implied by the file name's extension.
    pub fn resolve_format(&self) -> Option<InputFormat> {
        self.format.or_else(|| {
            self.file_name
                .as_deref()
                .and_then(InputFormat::from_file_name)
        })
    }

    /// Name shown in the `fileName` field.
    pub fn display_name(&self) -> String {
        match (&self.file_name, self.resolve_format()) {
            (Some(name), _) => name.clone(),
            (None, Some(format)) => format!("upload.{}", format),
            (None, None) => "upload".to_string(),
        }
    }
}

/// Query parameters for the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportQuery {
    /// Output format (default: text)
    #[serde(default)]
    pub format: Option<ExportFormat>,
}

/// Current dashboard state as rendered.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    /// Revision of the displayed schedule; 0 before the first load
    pub revision: u64,
    pub loaded: bool,
    #[serde(flatten)]
    pub surface: MemorySurface,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether a schedule is loaded
    pub loaded: bool,
}

//! Service layer for schedule analysis and presentation.
//!
//! This module sits between the parsers and the HTTP layer. The pure pieces
//! ([`stats`], [`bands`], [`presentation`], [`export`], [`planner`]) take a
//! schedule and return values; [`dashboard`] owns the current schedule and drives a
//! [`surface::RenderSurface`].

pub mod bands;
pub mod dashboard;
pub mod export;
pub mod planner;
pub mod presentation;
pub mod stats;
pub mod surface;


pub use bands::{classify, Band};
pub use dashboard::{
    prepare_autoload, Dashboard, FileSource, LoadReceipt, LoadedSchedule, PreparedLoad,
    ScheduleSource, SourcePayload,
};
pub use export::{to_csv, to_json, to_text, write_csv, ExportError, ExportFormat};
pub use planner::{validate_utilization, Planner, PlannerError};
pub use presentation::{detail_view, grid_cells, render, DetailEntry, DetailView, GridCell};
pub use stats::{compute_stats, Stats};
pub use surface::{DisplayField, MemorySurface, RenderSurface};

//! # Staffing Grid
//!
//! Hourly staffing heat-grid engine.
//!
//! This crate ingests an hourly staffing schedule (how many agents are assigned per
//! hour, optionally broken down by customer) as CSV or JSON, normalizes it into one
//! canonical schedule, and derives everything an interactive heat-grid needs:
//! summary statistics, per-cell intensity bands, and a drill-down detail view.
//!
//! ## Features
//!
//! - **Parsing**: Two interchangeable input formats, lenient at the value level
//! - **Analysis**: Max, rounded average, distinct customers, peak hour
//! - **Presentation**: Grid cells and detail views written to a render surface
//! - **Planning**: Call requirements to agents needed per hour
//! - **Export**: Text, JSON and CSV renderings of a schedule
//! - **HTTP API**: Upload schedules and read the rendered dashboard
//!
//! ## Architecture
//!
//! - [`models`]: Canonical schedule and call requirement types
//! - [`parsing`]: CSV and JSON schedule parsers, requirements parser
//! - [`services`]: Stats, bands, presentation, dashboard, planner, export
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use staffing_grid::parsing::InputFormat;
//! use staffing_grid::services::{Dashboard, DisplayField, MemorySurface};
//!
//! let mut dashboard = Dashboard::new(MemorySurface::new());
//! let receipt = dashboard
//!     .load_from_text("hour,total_agents,A,B\n0,5,3,2\n1,0,0,0", InputFormat::Csv, "day.csv")
//!     .unwrap();
//!
//! assert_eq!(receipt.stats.peak_hour, "00:00");
//! assert_eq!(dashboard.surface().field(DisplayField::AvgAgents), Some("3"));
//! ```

pub mod config;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

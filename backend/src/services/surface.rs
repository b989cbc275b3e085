//! Render targets for the presentation adapter.
//!
//! The adapter never builds markup itself; it writes named stats fields, grid cells
//! and the detail view into a [`RenderSurface`]. [`MemorySurface`] keeps the result as
//! plain data so the HTTP layer can serve it and tests can inspect it.

use std::fmt;

use serde::Serialize;

use super::presentation::{DetailView, GridCell};

/// Named display slots above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    /// Shows the schedule's maximum slot total.
    TotalAgents,
    AvgAgents,
    NumCustomers,
    PeakHour,
    FileName,
}

impl DisplayField {
    pub const ALL: [DisplayField; 5] = [
        DisplayField::TotalAgents,
        DisplayField::AvgAgents,
        DisplayField::NumCustomers,
        DisplayField::PeakHour,
        DisplayField::FileName,
    ];

    /// Element id of the field on the page.
    pub fn id(&self) -> &'static str {
        match self {
            DisplayField::TotalAgents => "totalAgents",
            DisplayField::AvgAgents => "avgAgents",
            DisplayField::NumCustomers => "numCustomers",
            DisplayField::PeakHour => "peakHour",
            DisplayField::FileName => "fileName",
        }
    }
}

impl fmt::Display for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Write-only view of the page the dashboard renders into.
pub trait RenderSurface {
    fn set_field(&mut self, field: DisplayField, value: String);

    /// Remove every grid cell.
    fn clear_grid(&mut self);

    fn push_cell(&mut self, cell: GridCell);

    fn show_detail(&mut self, detail: DetailView);

    fn hide_detail(&mut self);
}

/// Field values as shown on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub total_agents: Option<String>,
    pub avg_agents: Option<String>,
    pub num_customers: Option<String>,
    pub peak_hour: Option<String>,
    pub file_name: Option<String>,
}

impl FieldValues {
    pub fn get(&self, field: DisplayField) -> Option<&str> {
        match field {
            DisplayField::TotalAgents => self.total_agents.as_deref(),
            DisplayField::AvgAgents => self.avg_agents.as_deref(),
            DisplayField::NumCustomers => self.num_customers.as_deref(),
            DisplayField::PeakHour => self.peak_hour.as_deref(),
            DisplayField::FileName => self.file_name.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: DisplayField) -> &mut Option<String> {
        match field {
            DisplayField::TotalAgents => &mut self.total_agents,
            DisplayField::AvgAgents => &mut self.avg_agents,
            DisplayField::NumCustomers => &mut self.num_customers,
            DisplayField::PeakHour => &mut self.peak_hour,
            DisplayField::FileName => &mut self.file_name,
        }
    }
}

/// In-memory surface; serializes to the snapshot served over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemorySurface {
    pub fields: FieldValues,
    pub cells: Vec<GridCell>,
    /// The open detail view, if any.
    pub detail: Option<DetailView>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: DisplayField) -> Option<&str> {
        self.fields.get(field)
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail.is_some()
    }
}

impl RenderSurface for MemorySurface {
    fn set_field(&mut self, field: DisplayField, value: String) {
        *self.fields.slot_mut(field) = Some(value);
    }

    fn clear_grid(&mut self) {
        self.cells.clear();
    }

    fn push_cell(&mut self, cell: GridCell) {
        self.cells.push(cell);
    }

    fn show_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }
}

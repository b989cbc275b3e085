//! Presentation adapter: schedule + stats + bands into display records.
//!
//! Everything here is derived from the slot's position in the schedule. The parsed
//! `hour` value never reaches the page.

use serde::Serialize;

use super::bands::{classify, Band};
use super::stats::Stats;
use super::surface::{DisplayField, RenderSurface};
use crate::models::{hour_label, Schedule, ScheduleSlot};

/// Shown in the detail view when a slot has no breakdown entries.
pub const EMPTY_DETAIL_PLACEHOLDER: &str = "No agents scheduled";

/// One heat-grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// `HH:00` from the slot's position.
    pub label: String,
    pub total_agents: u32,
    /// Number of breakdown entries.
    pub customer_count: usize,
    /// `"1 customer"`, `"3 customers"`.
    pub customer_label: String,
    pub band: Band,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub customer: String,
    pub agents: u32,
}

/// Drill-down for a selected slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub position: usize,
    pub title: String,
    /// Sorted by agents, highest first. Equal counts keep breakdown order.
    pub entries: Vec<DetailEntry>,
    /// Set instead of entries when the breakdown is empty.
    pub placeholder: Option<String>,
    pub total_agents: u32,
}

pub fn customer_label(count: usize) -> String {
    if count == 1 {
        "1 customer".to_string()
    } else {
        format!("{} customers", count)
    }
}

pub fn grid_cell(slot: &ScheduleSlot, max_agents: u32) -> GridCell {
    let customer_count = slot.breakdown.len();
    GridCell {
        label: hour_label(slot.position),
        total_agents: slot.total_agents,
        customer_count,
        customer_label: customer_label(customer_count),
        band: classify(slot.total_agents, max_agents),
    }
}

/// Grid cells for every slot, in position order.
pub fn grid_cells(schedule: &Schedule, stats: &Stats) -> Vec<GridCell> {
    schedule
        .iter()
        .map(|slot| grid_cell(slot, stats.max_agents))
        .collect()
}

/// Detail view for the slot at `position`, or `None` when out of range.
pub fn detail_view(schedule: &Schedule, position: usize) -> Option<DetailView> {
    let slot = schedule.get(position)?;

    let mut entries: Vec<DetailEntry> = slot
        .breakdown
        .iter()
        .map(|e| DetailEntry {
            customer: e.customer.clone(),
            agents: e.agents,
        })
        .collect();
    entries.sort_by(|a, b| b.agents.cmp(&a.agents));

    let placeholder = entries
        .is_empty()
        .then(|| EMPTY_DETAIL_PLACEHOLDER.to_string());

    Some(DetailView {
        position,
        title: format!("Hour {} - Agent Breakdown", hour_label(position)),
        entries,
        placeholder,
        total_agents: slot.total_agents,
    })
}

/// Write the stats fields and the full grid for `schedule`.
///
/// The grid is cleared first and any open detail view is closed, so nothing from a
/// previously rendered schedule survives.
pub fn render<S: RenderSurface + ?Sized>(schedule: &Schedule, stats: &Stats, surface: &mut S) {
    surface.hide_detail();
    surface.set_field(DisplayField::TotalAgents, stats.max_agents.to_string());
    surface.set_field(DisplayField::AvgAgents, stats.avg_agents.to_string());
    surface.set_field(DisplayField::NumCustomers, stats.num_customers.to_string());
    surface.set_field(DisplayField::PeakHour, stats.peak_hour.clone());

    surface.clear_grid();
    for cell in grid_cells(schedule, stats) {
        surface.push_cell(cell);
    }
}

//! Summary statistics over a canonical schedule.

use serde::{Deserialize, Serialize};

use crate::models::{hour_label, Schedule};

/// Shown in place of the peak hour when there is nothing to rank.
pub const NO_PEAK: &str = "-";

/// Aggregate figures shown above the grid. Recomputed on every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub max_agents: u32,
    /// Mean of all slot totals, rounded half-up.
    pub avg_agents: u32,
    pub num_customers: usize,
    /// `HH:00` label of the first slot reaching `max_agents`, or `-`.
    pub peak_hour: String,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            max_agents: 0,
            avg_agents: 0,
            num_customers: 0,
            peak_hour: NO_PEAK.to_string(),
        }
    }
}

/// Compute [`Stats`] for a schedule.
pub fn compute_stats(schedule: &Schedule) -> Stats {
    if schedule.is_empty() {
        return Stats::default();
    }

    let max_agents = schedule.iter().map(|s| s.total_agents).max().unwrap_or(0);
    let total: u64 = schedule.iter().map(|s| u64::from(s.total_agents)).sum();
    let peak_hour = schedule
        .iter()
        .find(|s| s.total_agents == max_agents)
        .map(|s| hour_label(s.position))
        .unwrap_or_else(|| NO_PEAK.to_string());

    Stats {
        max_agents,
        avg_agents: round_half_up_mean(total, schedule.len() as u64),
        num_customers: schedule.customers().len(),
        peak_hour,
    }
}

/// `floor(sum / count + 0.5)` in integer arithmetic.
fn round_half_up_mean(sum: u64, count: u64) -> u32 {
    if count == 0 {
        return 0;
    }
    let rounded = (sum.saturating_mul(2) + count) / (count * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

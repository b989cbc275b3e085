//! Staffing planner: call requirements into an hourly agent schedule.

use tracing::debug;

use crate::models::{Breakdown, CallRequirement, Schedule, HOURS_PER_DAY};

/// Floor applied to the utilization factor before dividing by it.
pub const MIN_UTILIZATION: f64 = 0.01;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    #[error("utilization must be in (0, 1], got {0}")]
    InvalidUtilization(f64),
}

/// Accept a utilization factor in `(0, 1]`.
pub fn validate_utilization(utilization: f64) -> Result<f64, PlannerError> {
    if utilization > 0.0 && utilization <= 1.0 {
        Ok(utilization)
    } else {
        Err(PlannerError::InvalidUtilization(utilization))
    }
}

/// Builds a 24-slot schedule from call requirements.
#[derive(Debug, Clone)]
pub struct Planner {
    utilization: f64,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Planner {
    /// `utilization` is the share of an agent-hour spent on calls. Values below
    /// [`MIN_UTILIZATION`] are treated as that minimum.
    pub fn new(utilization: f64) -> Self {
        Self { utilization }
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    /// Agents one requirement needs in each hour of its window.
    pub fn agents_needed(&self, requirement: &CallRequirement) -> u32 {
        let workload_seconds = requirement.calls_per_hour() * f64::from(requirement.avg_duration_sec);
        let agent_capacity = SECONDS_PER_HOUR * self.utilization.max(MIN_UTILIZATION);
        // Float-to-int casts saturate.
        (workload_seconds / agent_capacity).ceil() as u32
    }

    /// Lay every requirement over hours `0..24`.
    ///
    /// Each hour in `[start_hour, end_hour)` gains the requirement's agents in its
    /// total. The breakdown records the customer's count for that hour; a customer
    /// listed twice keeps the count of its last requirement while the total keeps
    /// both.
    pub fn plan(&self, requirements: &[CallRequirement]) -> Schedule {
        let hours = HOURS_PER_DAY as usize;
        let mut totals = vec![0u32; hours];
        let mut breakdowns = vec![Breakdown::new(); hours];

        for requirement in requirements {
            let agents = self.agents_needed(requirement);
            debug!(
                "{}: {} agents/hour over {:02}:00-{:02}:00",
                requirement.customer_name, agents, requirement.start_hour, requirement.end_hour
            );

            let start = requirement.start_hour as usize;
            let end = (requirement.end_hour as usize).min(hours);
            for hour in start..end {
                totals[hour] = totals[hour].saturating_add(agents);
                breakdowns[hour].insert(requirement.customer_name.as_str(), agents);
            }
        }

        let mut schedule = Schedule::new();
        for (hour, (total, breakdown)) in totals.into_iter().zip(breakdowns).enumerate() {
            schedule.push(hour as u32, total, breakdown);
        }
        schedule
    }
}

//! Canonical in-memory schedule.
//!
//! Both input formats (CSV and JSON) normalize into [`Schedule`], an ordered list of
//! [`ScheduleSlot`] values. The slot's position in that list, not its parsed `hour`,
//! drives every hour label shown on the grid.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single customer's share of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub customer: String,
    pub agents: u32,
}

/// Per-slot mapping of customer name to assigned agents.
///
/// Entries keep insertion order, customer names are unique, and a zero count is never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `agents` for `customer`.
    ///
    /// Zero counts are ignored and return `false`. A customer already present keeps
    /// its original position and takes the new count.
    pub fn insert(&mut self, customer: impl Into<String>, agents: u32) -> bool {
        if agents == 0 {
            return false;
        }
        let customer = customer.into();
        match self.entries.iter_mut().find(|e| e.customer == customer) {
            Some(existing) => existing.agents = agents,
            None => self.entries.push(BreakdownEntry { customer, agents }),
        }
        true
    }

    pub fn get(&self, customer: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.customer == customer)
            .map(|e| e.agents)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakdownEntry> {
        self.entries.iter()
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.customer.as_str())
    }

    /// Sum of all customer counts. May disagree with the slot's stated total.
    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.agents)).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (customer, agents) in iter {
            breakdown.insert(customer, agents);
        }
        breakdown
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.customer, &entry.agents)?;
        }
        map.end()
    }
}

/// One time unit (nominally an hour) of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    /// Zero-based index in the schedule; the displayed hour label.
    pub position: usize,
    /// Hour value read from the input. Only exporters look at it.
    pub hour: u32,
    pub total_agents: u32,
    pub breakdown: Breakdown,
}

/// Ordered sequence of slots produced wholesale from one input payload.
///
/// There is no enforced relationship between a slot's `total_agents` and the sum of
/// its breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    slots: Vec<ScheduleSlot>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot; its position is the current length.
    pub fn push(&mut self, hour: u32, total_agents: u32, breakdown: Breakdown) -> &ScheduleSlot {
        let position = self.slots.len();
        self.slots.push(ScheduleSlot {
            position,
            hour,
            total_agents,
            breakdown,
        });
        &self.slots[position]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ScheduleSlot> {
        self.slots.get(position)
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleSlot> {
        self.slots.iter()
    }

    /// Distinct customer names across all slots, in first-seen order.
    pub fn customers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for name in self.slots.iter().flat_map(|s| s.breakdown.customers()) {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleSlot;
    type IntoIter = std::slice::Iter<'a, ScheduleSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

//! Roster (solution) model.
//!
//! A roster is the output of one generation run: the assignment list plus
//! the open slots no eligible worker could fill. Unfilled slots are a
//! normal, expected outcome when worker supply falls short of
//! station × slot demand; they are surfaced for manual resolution, not
//! raised as errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SlotName;

/// A generated weekly roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Station assignments.
    pub assignments: Vec<Assignment>,
    /// Open slots left without an eligible worker.
    pub unfilled: Vec<UnfilledSlot>,
}

/// A worker staffed onto one station for one (date, slot).
///
/// At most one assignment exists per (date, slot, station), and at most one
/// per (date, worker) across all slots and stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Slot within the day.
    pub slot: SlotName,
    /// Staffed station.
    pub station: String,
    /// Assigned worker.
    pub worker_id: String,
}

/// An open (date, slot, station) with no eligible worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledSlot {
    /// Calendar date of the open shift.
    pub date: NaiveDate,
    /// Slot within the day.
    pub slot: SlotName,
    /// Unstaffed station.
    pub station: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        date: NaiveDate,
        slot: SlotName,
        station: impl Into<String>,
        worker_id: impl Into<String>,
    ) -> Self {
        Self {
            date,
            slot,
            station: station.into(),
            worker_id: worker_id.into(),
        }
    }
}

impl UnfilledSlot {
    /// Creates a new unfilled marker.
    pub fn new(date: NaiveDate, slot: SlotName, station: impl Into<String>) -> Self {
        Self {
            date,
            slot,
            station: station.into(),
        }
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds an unfilled marker.
    pub fn add_unfilled(&mut self, slot: UnfilledSlot) {
        self.unfilled.push(slot);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of open slots left unfilled.
    pub fn unfilled_count(&self) -> usize {
        self.unfilled.len()
    }

    /// Whether every open slot received a worker.
    pub fn is_fully_staffed(&self) -> bool {
        self.unfilled.is_empty()
    }

    /// Finds the assignment for a (date, slot, station), if any.
    pub fn assignment_at(
        &self,
        date: NaiveDate,
        slot: SlotName,
        station: &str,
    ) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.date == date && a.slot == slot && a.station == station)
    }

    /// Returns all assignments for a given worker.
    pub fn assignments_for_worker(&self, worker_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.worker_id == worker_id)
            .collect()
    }

    /// Returns all assignments on a given date.
    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample_roster() -> Roster {
        let mut r = Roster::new();
        r.add_assignment(Assignment::new(d(15), SlotName::First, "A", "W1"));
        r.add_assignment(Assignment::new(d(15), SlotName::First, "B", "W2"));
        r.add_assignment(Assignment::new(d(16), SlotName::Second, "A", "W1"));
        r.add_unfilled(UnfilledSlot::new(d(16), SlotName::Second, "B"));
        r
    }

    #[test]
    fn test_counts() {
        let r = sample_roster();
        assert_eq!(r.assignment_count(), 3);
        assert_eq!(r.unfilled_count(), 1);
        assert!(!r.is_fully_staffed());
        assert!(Roster::new().is_fully_staffed());
    }

    #[test]
    fn test_assignment_at() {
        let r = sample_roster();
        let a = r.assignment_at(d(15), SlotName::First, "B").unwrap();
        assert_eq!(a.worker_id, "W2");
        assert!(r.assignment_at(d(15), SlotName::Second, "B").is_none());
    }

    #[test]
    fn test_assignments_for_worker() {
        let r = sample_roster();
        let w1 = r.assignments_for_worker("W1");
        assert_eq!(w1.len(), 2);
        assert!(r.assignments_for_worker("W9").is_empty());
    }

    #[test]
    fn test_assignments_on() {
        let r = sample_roster();
        assert_eq!(r.assignments_on(d(15)).len(), 2);
        assert_eq!(r.assignments_on(d(16)).len(), 1);
        assert!(r.assignments_on(d(17)).is_empty());
    }

    #[test]
    fn test_roster_serde_round_trip() {
        let r = sample_roster();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"2024-01-15\""));
        assert!(json.contains("\"first\""));
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

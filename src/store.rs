//! Roster store seam.
//!
//! The engine consumes a snapshot of workers and constraints; where that
//! snapshot lives is the caller's concern. [`RosterStore`] is the narrow
//! interface the upstream collaborator implements, with clear read
//! ownership: the engine reads once per run and never writes.
//!
//! [`InMemoryRosterStore`] is the reference implementation, suitable for
//! tests and for embedding without a database.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Constraint, Worker};

/// An inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range (inclusive).
    pub start: NaiveDate,
    /// Last date of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a date falls within the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Read access to the worker roster and its constraints.
///
/// Implementations must return a consistent snapshot: the engine assumes
/// the lists are fixed for the duration of one generation run.
pub trait RosterStore {
    /// All known workers.
    fn list_workers(&self) -> Vec<Worker>;

    /// Constraint records whose date falls within the range.
    fn list_constraints(&self, range: &DateRange) -> Vec<Constraint>;
}

/// In-memory roster store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterStore {
    workers: Vec<Worker>,
    constraints: Vec<Constraint>,
}

impl InMemoryRosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker.
    pub fn add_worker(&mut self, worker: Worker) {
        self.workers.push(worker);
    }

    /// Adds a constraint record.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Builder: adds a worker and returns self.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.add_worker(worker);
        self
    }

    /// Builder: adds a constraint and returns self.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.add_constraint(constraint);
        self
    }
}

impl RosterStore for InMemoryRosterStore {
    fn list_workers(&self) -> Vec<Worker> {
        self.workers.clone()
    }

    fn list_constraints(&self, range: &DateRange) -> Vec<Constraint> {
        self.constraints
            .iter()
            .filter(|c| range.contains(c.date))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotName;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_date_range_contains() {
        let range = DateRange::new(d(14), d(20));
        assert!(range.contains(d(14)));
        assert!(range.contains(d(17)));
        assert!(range.contains(d(20)));
        assert!(!range.contains(d(13)));
        assert!(!range.contains(d(21)));
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryRosterStore::new()
            .with_worker(Worker::roster("W1"))
            .with_worker(Worker::manager("M1"))
            .with_constraint(Constraint::unavailable("W1", d(15), SlotName::First))
            .with_constraint(Constraint::unavailable("W1", d(25), SlotName::Second));

        assert_eq!(store.list_workers().len(), 2);

        let in_week = store.list_constraints(&DateRange::new(d(14), d(20)));
        assert_eq!(in_week.len(), 1);
        assert_eq!(in_week[0].date, d(15));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryRosterStore::new();
        assert!(store.list_workers().is_empty());
        assert!(store
            .list_constraints(&DateRange::new(d(14), d(20)))
            .is_empty());
    }
}

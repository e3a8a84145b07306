//! Availability constraints.
//!
//! A constraint is a worker-declared exception to default availability for
//! one (date, slot). Absence of a record means available. Records whose
//! worker id matches no roster worker are inert.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SlotName;

/// A worker-declared availability exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Worker this exception belongs to.
    pub worker_id: String,
    /// Calendar date the exception applies to.
    pub date: NaiveDate,
    /// Slot the exception applies to.
    pub slot: SlotName,
    /// Availability for that (date, slot).
    pub available: bool,
    /// Free-text reason, e.g. a medical appointment.
    pub reason: String,
}

impl Constraint {
    /// Declares a worker unavailable for a (date, slot).
    pub fn unavailable(worker_id: impl Into<String>, date: NaiveDate, slot: SlotName) -> Self {
        Self {
            worker_id: worker_id.into(),
            date,
            slot,
            available: false,
            reason: String::new(),
        }
    }

    /// Declares a worker available for a (date, slot).
    ///
    /// Overrides an earlier unavailability record for the same key.
    pub fn available(worker_id: impl Into<String>, date: NaiveDate, slot: SlotName) -> Self {
        Self {
            available: true,
            ..Self::unavailable(worker_id, date, slot)
        }
    }

    /// Sets the reason text.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

/// Lookup index over constraint records.
///
/// Later records win for a repeated (worker, date, slot) key. The index is
/// only ever queried, never iterated, so it has no bearing on output order.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    by_worker: HashMap<String, HashMap<(NaiveDate, SlotName), bool>>,
    len: usize,
}

impl ConstraintSet {
    /// Builds the index from a record list.
    pub fn build(constraints: &[Constraint]) -> Self {
        let mut by_worker: HashMap<String, HashMap<(NaiveDate, SlotName), bool>> = HashMap::new();
        for c in constraints {
            by_worker
                .entry(c.worker_id.clone())
                .or_default()
                .insert((c.date, c.slot), c.available);
        }
        let len = by_worker.values().map(HashMap::len).sum();
        Self { by_worker, len }
    }

    /// Availability of a worker for a (date, slot). Defaults to available
    /// when no record exists.
    pub fn is_available(&self, worker_id: &str, date: NaiveDate, slot: SlotName) -> bool {
        self.by_worker
            .get(worker_id)
            .and_then(|per_worker| per_worker.get(&(date, slot)))
            .copied()
            .unwrap_or(true)
    }

    /// Number of distinct (worker, date, slot) keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//! Input validation for roster generation.
//!
//! Checks the structural integrity of a request before any assignment
//! happens, so a run either starts from valid inputs or fails without
//! producing output. Detects:
//! - Empty or duplicated station lists
//! - Duplicate worker ids
//! - Malformed target weeks (wrong date count, non-consecutive dates)
//!
//! Worker shortage is deliberately not a validation concern: a request
//! with zero assignable workers is valid and yields an all-unfilled
//! roster. Constraint records for unknown workers are likewise valid and
//! simply ignored by the engine.

use std::collections::HashSet;

use crate::error::InvalidInput;
use crate::models::Week;
use crate::scheduler::ScheduleRequest;

/// Validates a request and resolves its target week.
///
/// Fails fast on the first problem found; the call contract treats any
/// input error as fatal, so there is no value in collecting more.
pub fn validate_request(request: &ScheduleRequest) -> Result<Week, InvalidInput> {
    if request.stations.is_empty() {
        return Err(InvalidInput::NoStations);
    }

    let mut stations = HashSet::new();
    for station in &request.stations {
        if !stations.insert(station.as_str()) {
            return Err(InvalidInput::DuplicateStation(station.clone()));
        }
    }

    let mut worker_ids = HashSet::new();
    for worker in &request.workers {
        if !worker_ids.insert(worker.id.as_str()) {
            return Err(InvalidInput::DuplicateWorkerId(worker.id.clone()));
        }
    }

    Week::from_dates(&request.week_dates)
}

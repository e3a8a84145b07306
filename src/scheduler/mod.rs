//! Roster generation and staffing metrics.
//!
//! Provides the deterministic weekly assignment engine and roster quality
//! indicators.
//!
//! # Algorithm
//!
//! `Scheduler` walks the week day by day, slot by slot, staffing stations
//! in list order with a station-indexed round-robin over the eligible
//! worker pool. It is a pure function of its inputs: no randomness, no
//! retained state between runs.
//!
//! # KPI
//!
//! `RosterKpi` reports fill rate and per-worker load spread over a
//! generated roster.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

mod engine;
mod kpi;
mod run;

pub use engine::{ScheduleRequest, Scheduler};
pub use kpi::RosterKpi;
pub use run::ScheduleRun;

//! Weekly roster generation.
//!
//! # Algorithm
//!
//! 1. Validate the request (week shape, station list, worker ids).
//! 2. For each day in date order, build the day pool once: roster workers,
//!    minus rest-day observers when the date is a rest day.
//! 3. For each open slot in day order, for each station in list order,
//!    assign `eligible[station_index % eligible.len()]` where `eligible` is
//!    the current day pool minus workers with an unavailability constraint
//!    for that (date, slot). An assigned worker leaves the day pool: one
//!    post per worker per day.
//! 4. An empty eligible set records the (date, slot, station) as unfilled.
//!
//! The computation is a pure function of its inputs: identical requests
//! (including list order) produce identical rosters.
//!
//! # Complexity
//! O(d * s * k * w) where d=days, s=slots/day, k=stations, w=workers.
//!
//! # Reference
//! Ernst et al. (2004), "Staff scheduling and rostering: A review of
//! applications, methods and models"

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::error::InvalidInput;
use crate::models::{
    is_rest_day, Assignment, Constraint, ConstraintSet, Roster, SlotConfig, UnfilledSlot, Week,
    Worker,
};
use crate::store::{DateRange, RosterStore};
use crate::validation::validate_request;

use super::run::ScheduleRun;

/// Input container for one generation call.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Worker roster. Managers are carried but never assigned.
    pub workers: Vec<Worker>,
    /// Availability exceptions. Records for unknown workers are ignored.
    pub constraints: Vec<Constraint>,
    /// Ordered station list; the order drives the round-robin offset.
    pub stations: Vec<String>,
    /// The target week: exactly 7 consecutive dates.
    pub week_dates: Vec<NaiveDate>,
    /// Slot-hour configuration for the run.
    pub slot_config: SlotConfig,
}

impl ScheduleRequest {
    /// Creates a request with no constraints and the default slot
    /// configuration.
    pub fn new(workers: Vec<Worker>, stations: Vec<String>, week_dates: Vec<NaiveDate>) -> Self {
        Self {
            workers,
            constraints: Vec::new(),
            stations,
            week_dates,
            slot_config: SlotConfig::default(),
        }
    }

    /// Sets the availability constraints.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the slot-hour configuration.
    pub fn with_slot_config(mut self, slot_config: SlotConfig) -> Self {
        self.slot_config = slot_config;
        self
    }
}

/// Deterministic round-robin roster generator.
///
/// Stateless across calls: each generation builds a fresh [`ScheduleRun`]
/// and discards it. Undersupply is reported through `Roster::unfilled`,
/// never as an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_roster::models::Worker;
/// use shift_roster::scheduler::{ScheduleRequest, Scheduler};
///
/// let workers = vec![Worker::roster("W1"), Worker::roster("W2")];
/// let week = (0..7)
///     .map(|i| NaiveDate::from_ymd_opt(2024, 1, 14 + i).unwrap())
///     .collect();
/// let request = ScheduleRequest::new(workers, vec!["gate".into()], week);
///
/// let roster = Scheduler::new().generate(&request)?;
/// // 2 slots x 7 days, minus the two closed boundary slots
/// assert_eq!(roster.assignment_count(), 12);
/// assert!(roster.is_fully_staffed());
/// # Ok::<(), shift_roster::error::InvalidInput>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler;

impl Scheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Generates the weekly roster for a request.
    ///
    /// Fails atomically with [`InvalidInput`] before producing any output;
    /// a shortage of workers is not an error.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Roster, InvalidInput> {
        let week = validate_request(request)?;
        let constraints = ConstraintSet::build(&request.constraints);
        let mut run = ScheduleRun::new(week, request.slot_config, request.stations.clone());

        debug!(
            workers = request.workers.len(),
            stations = request.stations.len(),
            constraints = constraints.len(),
            week_start = %week.start(),
            "generating weekly roster"
        );

        for (day_index, &date) in week.dates().iter().enumerate() {
            let rest = is_rest_day(date);
            // One pool per day, in worker list order; assignment removes a
            // worker for the rest of the day.
            let mut pool: Vec<&Worker> = request
                .workers
                .iter()
                .filter(|w| w.is_assignable())
                .filter(|w| !(rest && w.observes_rest_day))
                .collect();

            for slot in run.open_slots(day_index).to_vec() {
                for (station_index, station) in request.stations.iter().enumerate() {
                    let eligible: Vec<usize> = pool
                        .iter()
                        .enumerate()
                        .filter(|(_, w)| constraints.is_available(&w.id, date, slot.name))
                        .map(|(i, _)| i)
                        .collect();

                    if eligible.is_empty() {
                        trace!(%date, slot = %slot.name, %station, "no eligible worker");
                        run.record_unfilled(UnfilledSlot::new(date, slot.name, station));
                        continue;
                    }

                    let picked = eligible[station_index % eligible.len()];
                    let worker = pool.remove(picked);
                    run.record_assignment(Assignment::new(date, slot.name, station, &worker.id));
                }
            }
        }

        let roster = run.finish();
        debug!(
            assignments = roster.assignment_count(),
            unfilled = roster.unfilled_count(),
            "roster generation complete"
        );
        Ok(roster)
    }

    /// Generates a roster from a [`RosterStore`] snapshot.
    ///
    /// Reads the worker list and the week's constraints once up front; the
    /// store is not consulted again during the run.
    pub fn generate_from_store<S: RosterStore>(
        &self,
        store: &S,
        stations: Vec<String>,
        week_dates: Vec<NaiveDate>,
        slot_config: SlotConfig,
    ) -> Result<Roster, InvalidInput> {
        let week = Week::from_dates(&week_dates)?;
        let range = DateRange::new(week.start(), week.end());
        let request = ScheduleRequest::new(store.list_workers(), stations, week_dates)
            .with_constraints(store.list_constraints(&range))
            .with_slot_config(slot_config);
        self.generate(&request)
    }
}

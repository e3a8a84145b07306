//! Roster quality metrics (KPIs).
//!
//! Computes staffing indicators from a generated roster: how much of the
//! demand was covered and how evenly the load landed on workers. Load
//! spread is the fairness signal a manager watches before re-running with
//! relaxed constraints or filling gaps by hand.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill Rate | filled / (filled + unfilled) |
//! | Load per Worker | assignments held by each roster worker |
//! | Load Spread | max load − min load across roster workers |

use std::collections::HashMap;

use crate::models::{Roster, Worker};

/// Staffing indicators for a generated roster.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Open station-slots in the run (filled + unfilled).
    pub open_slots: usize,
    /// Station-slots that received a worker.
    pub filled: usize,
    /// Station-slots left without a worker.
    pub unfilled: usize,
    /// Fraction of open station-slots covered (0.0..=1.0).
    pub fill_rate: f64,
    /// Assignment count per roster worker, including zero-load workers.
    pub load_by_worker: HashMap<String, usize>,
    /// Heaviest individual load.
    pub max_load: usize,
    /// Lightest individual load.
    pub min_load: usize,
}

impl RosterKpi {
    /// Computes KPIs from a roster and the worker list it was generated
    /// from.
    ///
    /// Only assignable workers are counted; a roster worker with no
    /// assignments appears with load 0.
    pub fn calculate(roster: &Roster, workers: &[Worker]) -> Self {
        let mut load_by_worker: HashMap<String, usize> = workers
            .iter()
            .filter(|w| w.is_assignable())
            .map(|w| (w.id.clone(), 0))
            .collect();

        for a in &roster.assignments {
            if let Some(load) = load_by_worker.get_mut(&a.worker_id) {
                *load += 1;
            }
        }

        let filled = roster.assignment_count();
        let unfilled = roster.unfilled_count();
        let open_slots = filled + unfilled;
        let fill_rate = if open_slots == 0 {
            1.0
        } else {
            filled as f64 / open_slots as f64
        };

        let max_load = load_by_worker.values().copied().max().unwrap_or(0);
        let min_load = load_by_worker.values().copied().min().unwrap_or(0);

        Self {
            open_slots,
            filled,
            unfilled,
            fill_rate,
            load_by_worker,
            max_load,
            min_load,
        }
    }

    /// Difference between the heaviest and lightest load.
    #[inline]
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }

    /// Whether no worker carries more than `max_spread` assignments beyond
    /// the lightest-loaded worker.
    pub fn is_balanced(&self, max_spread: usize) -> bool {
        self.load_spread() <= max_spread
    }
}

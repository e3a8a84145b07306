//! Transient per-call computation context.

use crate::models::{Assignment, Roster, SlotConfig, TimeSlot, UnfilledSlot, Week};

/// State accumulated while generating one weekly roster.
///
/// Holds the validated week, the resolved slot pair, the station list, and
/// the roster under construction. Created at the start of a generation
/// call and consumed at the end; never persisted between calls.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    week: Week,
    slots: [TimeSlot; 2],
    stations: Vec<String>,
    roster: Roster,
}

impl ScheduleRun {
    /// Creates the context for one generation call.
    pub fn new(week: Week, slot_config: SlotConfig, stations: Vec<String>) -> Self {
        Self {
            week,
            slots: slot_config.slots(),
            stations,
            roster: Roster::new(),
        }
    }

    /// The target week.
    #[inline]
    pub fn week(&self) -> &Week {
        &self.week
    }

    /// The station list, in assignment order.
    #[inline]
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// The slots open for assignment on the given day.
    ///
    /// The first slot of the first day and the last slot of the last day are
    /// closed: a half-shift spanning the week boundary belongs to the
    /// adjacent week's roster. Closed slots produce neither assignments nor
    /// unfilled entries.
    pub fn open_slots(&self, day_index: usize) -> &[TimeSlot] {
        match day_index {
            0 => &self.slots[1..],
            6 => &self.slots[..1],
            _ => &self.slots,
        }
    }

    /// Records a successful assignment.
    pub fn record_assignment(&mut self, assignment: Assignment) {
        self.roster.add_assignment(assignment);
    }

    /// Records an open slot no eligible worker could fill.
    pub fn record_unfilled(&mut self, slot: UnfilledSlot) {
        self.roster.add_unfilled(slot);
    }

    /// Completes the run, yielding the roster.
    pub fn finish(self) -> Roster {
        self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotName;
    use chrono::NaiveDate;

    fn run() -> ScheduleRun {
        let week = Week::starting(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        ScheduleRun::new(week, SlotConfig::Morning, vec!["A".into(), "B".into()])
    }

    #[test]
    fn test_first_day_drops_first_slot() {
        let run = run();
        let slots = run.open_slots(0);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].name, SlotName::Second);
    }

    #[test]
    fn test_last_day_drops_second_slot() {
        let run = run();
        let slots = run.open_slots(6);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].name, SlotName::First);
    }

    #[test]
    fn test_mid_week_days_keep_both_slots() {
        let run = run();
        for day_index in 1..6 {
            let slots = run.open_slots(day_index);
            assert_eq!(slots.len(), 2);
            assert_eq!(slots[0].name, SlotName::First);
            assert_eq!(slots[1].name, SlotName::Second);
        }
    }

    #[test]
    fn test_finish_yields_accumulated_roster() {
        let mut run = run();
        let date = run.week().start();
        run.record_assignment(Assignment::new(date, SlotName::Second, "A", "W1"));
        run.record_unfilled(UnfilledSlot::new(date, SlotName::Second, "B"));

        let roster = run.finish();
        assert_eq!(roster.assignment_count(), 1);
        assert_eq!(roster.unfilled_count(), 1);
    }
}

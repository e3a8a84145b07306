//! Target-week model.
//!
//! A scheduling run covers exactly 7 consecutive calendar dates. Friday and
//! Saturday are the designated weekly rest days: workers with
//! `observes_rest_day` are ineligible on those dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// The designated weekly rest days.
pub const REST_DAYS: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

/// Whether a date falls on a designated rest day.
#[inline]
pub fn is_rest_day(date: NaiveDate) -> bool {
    REST_DAYS.contains(&date.weekday())
}

/// A validated run of 7 consecutive calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    dates: [NaiveDate; 7],
}

impl Week {
    /// Validates a date list into a week.
    ///
    /// Fails unless the slice holds exactly 7 dates and each date is the
    /// calendar day after its predecessor.
    pub fn from_dates(dates: &[NaiveDate]) -> Result<Self, InvalidInput> {
        if dates.len() != 7 {
            return Err(InvalidInput::WrongDateCount(dates.len()));
        }
        for pair in dates.windows(2) {
            if pair[0].succ_opt() != Some(pair[1]) {
                return Err(InvalidInput::NonConsecutiveDates {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        let mut week = [dates[0]; 7];
        week.copy_from_slice(dates);
        Ok(Self { dates: week })
    }

    /// Builds the week beginning at `start`.
    pub fn starting(start: NaiveDate) -> Self {
        let mut dates = [start; 7];
        for (i, date) in dates.iter_mut().enumerate().skip(1) {
            *date = start + Duration::days(i as i64);
        }
        Self { dates }
    }

    /// The seven dates in order.
    #[inline]
    pub fn dates(&self) -> &[NaiveDate; 7] {
        &self.dates
    }

    /// First date of the week.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last date of the week.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.dates[6]
    }

    /// Position of a date within the week, if it falls inside.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|&d| d == date)
    }

    /// Whether the week contains the given date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.day_index(date).is_some()
    }
}

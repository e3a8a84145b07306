//! Input error taxonomy.
//!
//! A generation call either validates completely and runs, or fails here
//! before producing any output. Undersupply of workers is never an error —
//! it is reported through `Roster::unfilled`.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed call arguments. Fatal for the call; the caller must fix the
/// request and retry. Never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The target week did not contain exactly 7 dates.
    #[error("week must contain exactly 7 dates, got {0}")]
    WrongDateCount(usize),

    /// Two adjacent week dates are not consecutive calendar days.
    #[error("week dates must be consecutive: {next} does not follow {prev}")]
    NonConsecutiveDates { prev: NaiveDate, next: NaiveDate },

    /// The station list is empty.
    #[error("station list is empty")]
    NoStations,

    /// The same station identifier appears twice.
    #[error("duplicate station '{0}'")]
    DuplicateStation(String),

    /// Two workers share the same id.
    #[error("duplicate worker id '{0}'")]
    DuplicateWorkerId(String),

    /// A slot configuration label is not one of the enumerated options.
    #[error("unknown slot configuration '{0}'")]
    UnknownSlotConfig(String),
}

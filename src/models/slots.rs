//! Time-slot models.
//!
//! Each calendar day has exactly two slots, `First` and `Second`, whose hour
//! ranges come from a slot configuration chosen per scheduling run from a
//! small enumerated set. Hours are whole clock hours; an end hour of 24
//! means midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Position of a slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotName {
    First,
    Second,
}

/// A slot with its resolved hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Position within the day.
    pub name: SlotName,
    /// Start hour (0..=23).
    pub start_hour: u32,
    /// End hour (1..=24, exclusive; 24 = midnight).
    pub end_hour: u32,
}

/// The enumerated slot-hour configurations a manager can pick per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotConfig {
    /// 08:00–12:00 and 20:00–00:00.
    #[default]
    Morning,
    /// 12:00–16:00 and 00:00–04:00.
    Afternoon,
    /// 16:00–20:00 and 04:00–08:00.
    Evening,
}

impl SlotName {
    /// Both slot names in day order.
    pub const ALL: [SlotName; 2] = [SlotName::First, SlotName::Second];
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotName::First => write!(f, "first"),
            SlotName::Second => write!(f, "second"),
        }
    }
}

impl TimeSlot {
    /// Creates a slot with the given hour range.
    pub fn new(name: SlotName, start_hour: u32, end_hour: u32) -> Self {
        Self {
            name,
            start_hour,
            end_hour,
        }
    }

    /// Length of the slot in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Clock-face label, e.g. `"20:00-00:00"`.
    pub fn hours_label(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour % 24)
    }
}

impl SlotConfig {
    /// Resolves the configuration into its two slots, in day order.
    pub fn slots(self) -> [TimeSlot; 2] {
        match self {
            SlotConfig::Morning => [
                TimeSlot::new(SlotName::First, 8, 12),
                TimeSlot::new(SlotName::Second, 20, 24),
            ],
            SlotConfig::Afternoon => [
                TimeSlot::new(SlotName::First, 12, 16),
                TimeSlot::new(SlotName::Second, 0, 4),
            ],
            SlotConfig::Evening => [
                TimeSlot::new(SlotName::First, 16, 20),
                TimeSlot::new(SlotName::Second, 4, 8),
            ],
        }
    }

    /// Wire label for this configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotConfig::Morning => "morning",
            SlotConfig::Afternoon => "afternoon",
            SlotConfig::Evening => "evening",
        }
    }

    /// Human-readable label, e.g. `"08:00-12:00 & 20:00-00:00"`.
    pub fn label(self) -> String {
        let [first, second] = self.slots();
        format!("{} & {}", first.hours_label(), second.hours_label())
    }
}

impl fmt::Display for SlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotConfig {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(SlotConfig::Morning),
            "afternoon" => Ok(SlotConfig::Afternoon),
            "evening" => Ok(SlotConfig::Evening),
            other => Err(InvalidInput::UnknownSlotConfig(other.to_string())),
        }
    }
}

//! Roster domain models.
//!
//! Provides the core data types for representing a weekly staffing problem
//! and its solution. Domain-agnostic within shift rostering — applicable to
//! guard posts, hospital wards, help desks, and similar station staffing.
//!
//! # Domain Mappings
//!
//! | shift-roster | Security | Healthcare | Retail |
//! |--------------|----------|------------|--------|
//! | Worker | Guard | Nurse | Clerk |
//! | Station | Post | Ward desk | Register |
//! | TimeSlot | Watch | Shift block | Opening/closing |
//! | Roster | Guard duty list | Ward rota | Staff plan |

mod constraint;
mod roster;
mod slots;
mod week;
mod worker;

pub use constraint::{Constraint, ConstraintSet};
pub use roster::{Assignment, Roster, UnfilledSlot};
pub use slots::{SlotConfig, SlotName, TimeSlot};
pub use week::{is_rest_day, Week, REST_DAYS};
pub use worker::{Gender, Role, Worker};

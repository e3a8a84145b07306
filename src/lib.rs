//! Weekly shift-roster engine.
//!
//! Provides domain models, validation, and a deterministic assignment
//! engine for staffing stations across a 7-day week. Given a worker
//! roster, availability constraints, and an ordered station list, the
//! engine produces a conflict-free assignment with explicit unfilled
//! markers where worker supply falls short.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Constraint`, `Week`,
//!   `SlotConfig`, `Roster`, `Assignment`, `UnfilledSlot`
//! - **`scheduler`**: The generation engine, its per-run context, and
//!   roster KPIs
//! - **`validation`**: Request integrity checks (week shape, station list,
//!   worker ids)
//! - **`store`**: The `RosterStore` seam to the upstream roster owner
//! - **`error`**: The `InvalidInput` taxonomy
//!
//! # Guarantees
//!
//! One post per worker per day, one worker per station slot, rest-day and
//! unavailability exclusions honored, and byte-identical output for
//! identical inputs. Undersupply surfaces as `Roster::unfilled`, never as
//! an error.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Van den Bergh et al. (2013), "Personnel scheduling: A literature
//!   review"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

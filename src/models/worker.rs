//! Worker model.
//!
//! Workers are the people staffed onto stations. Each worker has a role
//! (only roster workers are assignable), an optional gender, and a flag for
//! rest-day observance. Worker records are immutable for the duration of a
//! scheduling run; the roster store mutates them between runs.

use serde::{Deserialize, Serialize};

/// A worker that can be assigned to station shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Role classification. Managers are never assignable.
    pub role: Role,
    /// Optional gender, carried as roster data. Takes no part in
    /// eligibility.
    pub gender: Option<Gender>,
    /// Whether this worker observes the designated weekly rest days and
    /// must not be assigned on them.
    pub observes_rest_day: bool,
}

/// Worker role classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Runs the roster; never appears in it.
    #[serde(rename = "manager")]
    Manager,
    /// Eligible for station assignment.
    #[serde(rename = "worker")]
    RosterWorker,
}

/// Worker gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Worker {
    /// Creates a new worker with the given id and role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            gender: None,
            observes_rest_day: false,
        }
    }

    /// Creates an assignable roster worker.
    pub fn roster(id: impl Into<String>) -> Self {
        Self::new(id, Role::RosterWorker)
    }

    /// Creates a manager.
    pub fn manager(id: impl Into<String>) -> Self {
        Self::new(id, Role::Manager)
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets rest-day observance.
    pub fn observing_rest_day(mut self, observes: bool) -> Self {
        self.observes_rest_day = observes;
        self
    }

    /// Whether this worker may appear in a roster at all.
    #[inline]
    pub fn is_assignable(&self) -> bool {
        self.role == Role::RosterWorker
    }
}

//! Timetable (combination) model.
//!
//! A timetable is one fully-specified weekly schedule: the flattened
//! sessions of one selected option per course. The combinator constructs
//! candidates, keeps the conflict-free ones, and hands them downstream
//! ready to render as a weekly grid.

use serde::{Deserialize, Serialize};

use super::{Session, TimeOfDay, Weekday};

/// One full weekly schedule candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Flattened sessions of every selected option, in selection order.
    pub sessions: Vec<Session>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetable from already-flattened sessions.
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether this timetable has no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions falling on the given day, in stored order.
    pub fn sessions_on(&self, day: Weekday) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.day == day).collect()
    }

    /// Whether no session falls on the given day.
    pub fn is_free_on(&self, day: Weekday) -> bool {
        self.sessions.iter().all(|s| s.day != day)
    }

    /// Whether every session ends at or before `time`.
    ///
    /// Vacuously true for an empty timetable.
    pub fn ends_by(&self, time: TimeOfDay) -> bool {
        self.sessions.iter().all(|s| s.end <= time)
    }

    /// Whether every session starts at or after `time`.
    ///
    /// Vacuously true for an empty timetable.
    pub fn starts_at_or_after(&self, time: TimeOfDay) -> bool {
        self.sessions.iter().all(|s| s.start >= time)
    }

    /// Earliest session start across the week, if any session exists.
    pub fn earliest_start(&self) -> Option<TimeOfDay> {
        self.sessions.iter().map(|s| s.start).min()
    }

    /// Latest session end across the week, if any session exists.
    pub fn latest_end(&self) -> Option<TimeOfDay> {
        self.sessions.iter().map(|s| s.end).max()
    }
}

//! Timetable domain models.
//!
//! Core data types for representing course offerings and generated
//! weekly schedules.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Session` | One scheduled time block (kind + day + start + end) |
//! | `GroupOption` | One selectable bundle of sessions for a course |
//! | `Course` | A named set of mutually-exclusive options |
//! | `Timetable` | One full selection, flattened to sessions |

mod course;
mod session;
mod timetable;

pub use course::{Course, GroupOption};
pub use session::{ComponentKind, ParseDayError, ParseTimeError, Session, TimeOfDay, Weekday};
pub use timetable::Timetable;

//! Timetable combination engine for university course scheduling.
//!
//! Given a set of courses, each offering mutually-exclusive group options
//! (bundles of timed sessions), this crate enumerates every selection of one
//! option per course whose sessions do not collide on any day, optionally
//! restricted by a scheduling preference.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `GroupOption`, `Course`,
//!   `Timetable`, `TimeOfDay`, `Weekday`, `ComponentKind`
//! - **`validation`**: Input integrity checks (duplicate names, empty option
//!   lists, inverted time ranges)
//! - **`filter`**: Scheduling preferences (`ScheduleFilter`) and their
//!   external-choice parsing
//! - **`combinator`**: Conflict checking and exhaustive combination search
//! - **`catalog`**: Assembly of per-course option lists from raw linked
//!   group records
//!
//! # Scope
//!
//! This crate is the pure computational core of a timetable-builder web app.
//! Authentication, persistence, HTTP routing, grid rendering, and PDF export
//! belong to the surrounding service; callers hand the combinator
//! already-fetched courses and receive an in-memory list of valid timetables.
//! The search is exhaustive enumeration over a small combinatorial space,
//! not a constraint solver.

pub mod catalog;
pub mod combinator;
pub mod filter;
pub mod models;
pub mod validation;

//! Conflict checking and exhaustive combination search.
//!
//! # Algorithm
//!
//! 1. Enumerate the Cartesian product over the per-course option lists
//!    (one option per course), lazily, courses in input order with the
//!    last course's options varying fastest.
//! 2. Flatten each selection's sessions into a candidate timetable.
//! 3. Keep the candidates that are pairwise conflict-free and that the
//!    requested filter accepts.
//!
//! # Complexity
//!
//! O(Π nᵢ · s²) where nᵢ is the option count of course i and s the
//! session count of one candidate. Inputs are a handful of courses with
//! a handful of options each, so exhaustive enumeration is affordable;
//! a service exposed to untrusted input sizes should call
//! `generate_with_limit`, since the product grows multiplicatively.
//!
//! # Determinism
//!
//! Pure functions of their inputs: no mutation, no randomness. Two calls
//! on identical inputs yield identical timetables in identical order.

use crate::filter::ScheduleFilter;
use crate::models::{Course, Session, Timetable};

/// Whether a flat list of sessions is free of collisions.
///
/// True iff no unordered pair of sessions shares a day with overlapping
/// half-open time ranges. Touching endpoints (one session ending exactly
/// when another starts) are not a collision. Order independent.
pub fn is_conflict_free(sessions: &[Session]) -> bool {
    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.overlaps(b) {
                return false;
            }
        }
    }
    true
}

/// Lazy enumerator of the raw option product.
///
/// Yields every selection of one option per course as a flattened
/// `Timetable`, conflicting or not, in lexicographic order. The product
/// is never materialized; memory stays bounded by one candidate.
///
/// # Edge semantics
///
/// - Any course with an empty option list collapses the product: nothing
///   is yielded.
/// - An empty course slice is a product of zero factors, which has
///   exactly one (empty) member: a single empty timetable is yielded.
///
/// These two cases are distinct and must not be conflated.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    courses: &'a [Course],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(courses: &'a [Course]) -> Self {
        Self {
            courses,
            indices: vec![0; courses.len()],
            done: courses.iter().any(|c| c.options.is_empty()),
        }
    }

    /// Flattens the currently selected options into one timetable.
    fn current(&self) -> Timetable {
        let sessions = self
            .courses
            .iter()
            .zip(&self.indices)
            .flat_map(|(course, &i)| course.options[i].sessions.iter().cloned())
            .collect();
        Timetable::from_sessions(sessions)
    }

    /// Odometer step: increment from the right, carrying leftward.
    fn advance(&mut self) {
        for slot in (0..self.indices.len()).rev() {
            self.indices[slot] += 1;
            if self.indices[slot] < self.courses[slot].options.len() {
                return;
            }
            self.indices[slot] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Timetable;

    fn next(&mut self) -> Option<Timetable> {
        if self.done {
            return None;
        }
        let item = self.current();
        self.advance();
        Some(item)
    }
}

/// Lazily enumerates every raw combination, valid or not.
pub fn combinations(courses: &[Course]) -> Combinations<'_> {
    Combinations::new(courses)
}

/// Generates every conflict-free timetable the filter accepts.
///
/// Output order is the product's enumeration order; the filtered result
/// is an order-preserving subsequence of the unfiltered one.
pub fn generate(courses: &[Course], filter: ScheduleFilter) -> Vec<Timetable> {
    combinations(courses)
        .filter(|t| is_conflict_free(&t.sessions) && filter.accepts(t))
        .collect()
}

/// Like `generate`, but stops after `limit` accepted timetables.
///
/// Ceiling for deployments behind a request boundary, where a course
/// with an unexpectedly large option list would otherwise blow up the
/// response.
pub fn generate_with_limit(
    courses: &[Course],
    filter: ScheduleFilter,
    limit: usize,
) -> Vec<Timetable> {
    combinations(courses)
        .filter(|t| is_conflict_free(&t.sessions) && filter.accepts(t))
        .take(limit)
        .collect()
}

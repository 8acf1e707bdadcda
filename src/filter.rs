//! Scheduling preference filters.
//!
//! A filter is a pure predicate over a candidate timetable, applied after
//! conflict checking. The set of preferences is a closed enumeration —
//! the surrounding service maps the user's choice (a query-string token)
//! to one variant before invoking the combinator, rather than passing
//! arbitrary callables across the request boundary.
//!
//! Thresholds: "mornings" means every session is over by noon, and
//! "afternoons" means nothing starts before 13:00.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{TimeOfDay, Timetable, Weekday};

/// Latest end time a session may have under `MorningsOnly`.
pub const MORNING_END: TimeOfDay = TimeOfDay::from_hm(12, 0);

/// Earliest start time a session may have under `AfternoonsOnly`.
pub const AFTERNOON_START: TimeOfDay = TimeOfDay::from_hm(13, 0);

/// A scheduling preference over candidate timetables.
///
/// The reference UI applies one filter at a time; callers needing a
/// conjunction can AND the `accepts` results of several filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleFilter {
    /// No restriction.
    All,
    /// Every session must end at or before noon.
    MorningsOnly,
    /// Every session must start at or after 13:00.
    AfternoonsOnly,
    /// No session may fall on the given day.
    DayFree(Weekday),
}

impl ScheduleFilter {
    /// Whether the given timetable satisfies this preference.
    ///
    /// Vacuously true for an empty timetable under every variant.
    pub fn accepts(&self, timetable: &Timetable) -> bool {
        match self {
            ScheduleFilter::All => true,
            ScheduleFilter::MorningsOnly => timetable.ends_by(MORNING_END),
            ScheduleFilter::AfternoonsOnly => timetable.starts_at_or_after(AFTERNOON_START),
            ScheduleFilter::DayFree(day) => timetable.is_free_on(*day),
        }
    }
}

impl Default for ScheduleFilter {
    fn default() -> Self {
        ScheduleFilter::All
    }
}

impl fmt::Display for ScheduleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleFilter::All => f.write_str("all"),
            ScheduleFilter::MorningsOnly => f.write_str("mornings"),
            ScheduleFilter::AfternoonsOnly => f.write_str("afternoons"),
            ScheduleFilter::DayFree(day) => {
                write!(f, "day_free_{}", day.name().to_ascii_lowercase())
            }
        }
    }
}

/// Error from parsing a filter choice token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(String);

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown schedule filter '{}'", self.0)
    }
}

impl std::error::Error for ParseFilterError {}

impl FromStr for ScheduleFilter {
    type Err = ParseFilterError;

    /// Parses the external choice token: `all`, `mornings`, `afternoons`,
    /// or `day_free_<weekday>`. Unknown tokens are an error, never a
    /// silent fall-through to `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "all" => Ok(ScheduleFilter::All),
            "mornings" => Ok(ScheduleFilter::MorningsOnly),
            "afternoons" => Ok(ScheduleFilter::AfternoonsOnly),
            _ => {
                if let Some(day) = token.strip_prefix("day_free_") {
                    let day = day
                        .parse::<Weekday>()
                        .map_err(|_| ParseFilterError(s.to_string()))?;
                    Ok(ScheduleFilter::DayFree(day))
                } else {
                    Err(ParseFilterError(s.to_string()))
                }
            }
        }
    }
}

//! Session model and its closed vocabularies.
//!
//! Defines the atomic time block of a timetable: a course component
//! (theory, practice, lab) meeting on a weekday between two wall-clock
//! times.
//!
//! # Time Model
//! All times are minutes since midnight (`TimeOfDay`), minute precision,
//! within a single calendar day — sessions never cross midnight.
//! Time ranges are half-open [start, end): a session ending exactly when
//! another starts does not collide with it.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A wall-clock time of day, stored as minutes since midnight.
///
/// The single time representation used throughout the crate. The external
/// `"HH:MM"` form is handled by `FromStr`/`Display`, and serde uses the
/// same string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Creates a time from total minutes since midnight.
    pub const fn from_minutes(total: u16) -> Self {
        Self(total)
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Error from parsing an `"HH:MM"` time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError(String);

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day '{}', expected HH:MM", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        if hour > 23 || minute > 59 {
            return Err(err());
        }
        Ok(Self::from_hm(hour, minute))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Day of the teaching week.
///
/// A fixed six-day set — Sunday is not part of the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days, in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// English day name.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing a weekday name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayError(String);

impl fmt::Display for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday '{}'", self.0)
    }
}

impl std::error::Error for ParseDayError {}

impl FromStr for Weekday {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            _ => Err(ParseDayError(s.to_string())),
        }
    }
}

/// Kind of course component a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Lecture / theory group.
    Theory,
    /// Exercise / practice group.
    Practice,
    /// Laboratory group.
    Lab,
}

impl ComponentKind {
    /// All kinds, in Theory < Practice < Lab order.
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Theory,
        ComponentKind::Practice,
        ComponentKind::Lab,
    ];

    /// Parses a raw component code by its leading letter.
    ///
    /// Upstream data carries free-form component strings ("T", "Theory",
    /// "LAB 1"); only the first letter is significant.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().chars().next()?.to_ascii_uppercase() {
            'T' => Some(ComponentKind::Theory),
            'P' => Some(ComponentKind::Practice),
            'L' => Some(ComponentKind::Lab),
            _ => None,
        }
    }
}

/// One scheduled time block of a course group.
///
/// Immutable value type; the optional instructor and room fields are
/// display metadata and take no part in conflict checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Component kind of the owning group.
    pub kind: ComponentKind,
    /// Day the session meets.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start: TimeOfDay,
    /// End time (exclusive).
    pub end: TimeOfDay,
    /// Teaching staff, if known.
    pub instructor: Option<String>,
    /// Room, if known.
    pub room: Option<String>,
}

impl Session {
    /// Creates a session with no instructor or room metadata.
    pub fn new(kind: ComponentKind, day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            kind,
            day,
            start,
            end,
            instructor: None,
            room: None,
        }
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Session length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether two sessions collide: same day and overlapping half-open
    /// time ranges. Touching endpoints do not collide.
    pub fn overlaps(&self, other: &Session) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({} {}-{})", self.kind, self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_components() {
        let t = TimeOfDay::from_hm(9, 30);
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(TimeOfDay::from_minutes(570), t);
    }

    #[test]
    fn test_time_of_day_ordering() {
        assert!(TimeOfDay::from_hm(8, 0) < TimeOfDay::from_hm(8, 1));
        assert!(TimeOfDay::from_hm(12, 0) < TimeOfDay::from_hm(13, 0));
    }

    #[test]
    fn test_time_parse_and_display() {
        let t: TimeOfDay = "08:05".parse().unwrap();
        assert_eq!(t, TimeOfDay::from_hm(8, 5));
        assert_eq!(t.to_string(), "08:05");

        let t2: TimeOfDay = "9:00".parse().unwrap();
        assert_eq!(t2, TimeOfDay::from_hm(9, 0));
    }

    #[test]
    fn test_time_parse_rejects_malformed() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("0800".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_serde_string_form() {
        let t = TimeOfDay::from_hm(14, 45);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"14:45\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!(" FRIDAY ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("sunday".parse::<Weekday>().is_err());
        assert_eq!(Weekday::ALL.len(), 6);
    }

    #[test]
    fn test_component_kind_from_code() {
        assert_eq!(ComponentKind::from_code("T"), Some(ComponentKind::Theory));
        assert_eq!(
            ComponentKind::from_code(" practice"),
            Some(ComponentKind::Practice)
        );
        assert_eq!(ComponentKind::from_code("LAB 1"), Some(ComponentKind::Lab));
        assert_eq!(ComponentKind::from_code("X"), None);
        assert_eq!(ComponentKind::from_code(""), None);
    }

    #[test]
    fn test_session_overlap() {
        let a = Session::new(
            ComponentKind::Theory,
            Weekday::Monday,
            TimeOfDay::from_hm(8, 0),
            TimeOfDay::from_hm(10, 0),
        );
        let b = Session::new(
            ComponentKind::Lab,
            Weekday::Monday,
            TimeOfDay::from_hm(9, 0),
            TimeOfDay::from_hm(11, 0),
        );
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_session_touching_endpoints_do_not_overlap() {
        let a = Session::new(
            ComponentKind::Theory,
            Weekday::Monday,
            TimeOfDay::from_hm(8, 0),
            TimeOfDay::from_hm(10, 0),
        );
        let b = Session::new(
            ComponentKind::Practice,
            Weekday::Monday,
            TimeOfDay::from_hm(10, 0),
            TimeOfDay::from_hm(12, 0),
        );
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_session_different_days_never_overlap() {
        let a = Session::new(
            ComponentKind::Theory,
            Weekday::Monday,
            TimeOfDay::from_hm(8, 0),
            TimeOfDay::from_hm(10, 0),
        );
        let b = Session::new(
            ComponentKind::Theory,
            Weekday::Tuesday,
            TimeOfDay::from_hm(8, 0),
            TimeOfDay::from_hm(10, 0),
        );
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_session_builder_metadata() {
        let s = Session::new(
            ComponentKind::Lab,
            Weekday::Wednesday,
            TimeOfDay::from_hm(15, 0),
            TimeOfDay::from_hm(17, 0),
        )
        .with_instructor("Dr. Vega")
        .with_room("B-204");

        assert_eq!(s.instructor.as_deref(), Some("Dr. Vega"));
        assert_eq!(s.room.as_deref(), Some("B-204"));
        assert_eq!(s.duration_minutes(), 120);
    }
}

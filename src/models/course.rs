//! Course and group option models.
//!
//! A course offers one or more mutually-exclusive group options; a valid
//! timetable selects exactly one option per course. An option is the
//! atomic unit of choice — when a course's components are linked (theory
//! group T1 with practice group P1), the option already bundles the
//! sessions of every linked component.

use serde::{Deserialize, Serialize};

use super::Session;

/// One selectable bundle of sessions for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOption {
    /// Group label shown to the user (e.g. "T1" or "T1+P2"). `None` when
    /// the data source carries no group names.
    pub label: Option<String>,
    /// Sessions of this option, in the order the data source lists them.
    pub sessions: Vec<Session>,
}

impl GroupOption {
    /// Creates an unlabeled option from its sessions.
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            label: None,
            sessions,
        }
    }

    /// Sets the group label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of sessions in this option.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether this option carries no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// A named course with its mutually-exclusive group options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (unique across one combination request).
    pub name: String,
    /// Selectable options. A course with zero options collapses the whole
    /// combination product to nothing — see `combinator`.
    pub options: Vec<GroupOption>,
}

impl Course {
    /// Creates a course with no options yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option (builder form).
    pub fn with_option(mut self, option: GroupOption) -> Self {
        self.options.push(option);
        self
    }

    /// Adds an option.
    pub fn add_option(&mut self, option: GroupOption) {
        self.options.push(option);
    }

    /// Whether this course has any options.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentKind, TimeOfDay, Weekday};

    fn session(day: Weekday, start_h: u16, end_h: u16) -> Session {
        Session::new(
            ComponentKind::Theory,
            day,
            TimeOfDay::from_hm(start_h, 0),
            TimeOfDay::from_hm(end_h, 0),
        )
    }

    #[test]
    fn test_course_builder() {
        let course = Course::new("Algebra")
            .with_option(
                GroupOption::new(vec![session(Weekday::Monday, 8, 10)]).with_label("T1"),
            )
            .with_option(
                GroupOption::new(vec![session(Weekday::Tuesday, 8, 10)]).with_label("T2"),
            );

        assert_eq!(course.name, "Algebra");
        assert_eq!(course.option_count(), 2);
        assert!(course.has_options());
        assert_eq!(course.options[0].label.as_deref(), Some("T1"));
        assert_eq!(course.options[0].session_count(), 1);
    }

    #[test]
    fn test_course_without_options() {
        let course = Course::new("Seminar");
        assert!(!course.has_options());
        assert_eq!(course.option_count(), 0);
    }

    #[test]
    fn test_group_option_empty() {
        let opt = GroupOption::new(Vec::new());
        assert!(opt.is_empty());
        assert_eq!(opt.session_count(), 0);
        assert_eq!(opt.label, None);
    }
}

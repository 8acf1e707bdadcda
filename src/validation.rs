//! Input validation for combination requests.
//!
//! Checks structural integrity of courses before they reach the
//! combinator. Detects:
//! - Duplicate course names
//! - Courses with no options (these collapse the whole product to nothing)
//! - Options with no sessions
//! - Sessions whose time range is inverted or empty (end <= start)
//!
//! The combinator itself does not re-validate; it treats session time
//! ranges literally. Callers that accept untrusted data should run
//! `validate_courses` first and surface the errors.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same name.
    DuplicateCourseName,
    /// A course has no options.
    EmptyCourse,
    /// An option has no sessions.
    EmptySessionList,
    /// A session ends at or before its start.
    InvertedTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the courses of a combination request.
///
/// Checks:
/// 1. No duplicate course names
/// 2. Every course has at least one option
/// 3. Every option has at least one session
/// 4. Every session satisfies start < end
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for course in courses {
        if !names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseName,
                format!("Duplicate course name: {}", course.name),
            ));
        }

        if course.options.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no options", course.name),
            ));
        }

        for (idx, option) in course.options.iter().enumerate() {
            let label = option.label.as_deref().unwrap_or("unnamed");
            if option.sessions.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySessionList,
                    format!(
                        "Course '{}' option #{idx} ({label}) has no sessions",
                        course.name
                    ),
                ));
            }

            for session in &option.sessions {
                if session.end <= session.start {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedTimeRange,
                        format!(
                            "Course '{}' option #{idx} ({label}) has a session on {} \
                             with end {} not after start {}",
                            course.name, session.day, session.end, session.start
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Assembly of course option lists from raw linked group records.
//!
//! Upstream storage keeps one row per group: course name, group name
//! (e.g. "T1", "P2"), a free-form component string, and the group's
//! sessions. Groups of different components are linked by the trailing
//! number of their name — theory "T1" belongs with practice "P1" — and a
//! student who takes one must take the others of the same link.
//!
//! For each course and link key, the full options are the Cartesian
//! product of the per-component group choices, each flattened into one
//! `GroupOption` carrying every chosen group's sessions. Groups whose
//! name has no trailing number, or whose component string is
//! unrecognizable, are skipped.
//!
//! Ordering is pinned: courses and link keys in first-appearance order,
//! components in Theory < Practice < Lab order, groups in input order.

use regex::Regex;

use crate::models::{ComponentKind, Course, GroupOption, Session};

/// One raw group row from the upstream data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    /// Owning course name.
    pub course: String,
    /// Group name; its trailing digits are the link key.
    pub group: String,
    /// Free-form component string; only the leading letter is read.
    pub component: String,
    /// Sessions of this group.
    pub sessions: Vec<Session>,
}

impl GroupRecord {
    /// Creates a record with no sessions yet.
    pub fn new(
        course: impl Into<String>,
        group: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            group: group.into(),
            component: component.into(),
            sessions: Vec::new(),
        }
    }

    /// Adds a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }
}

/// Extracts the link key: the trailing digit run of a group name.
fn link_key(group: &str) -> Option<String> {
    let re = Regex::new(r"(\d+)\s*$").unwrap();
    re.captures(group).map(|c| c[1].to_string())
}

/// Component-bucketed groups sharing one link key.
#[derive(Debug, Default)]
struct LinkBucket {
    key: String,
    // Indexed by ComponentKind::ALL position.
    groups: [Vec<usize>; 3],
}

/// Assembles per-course option lists from raw group records.
///
/// Records with an unrecognizable component or a group name without a
/// link key are skipped. Courses that end up with zero options are
/// omitted, so the result feeds the combinator directly.
pub fn assemble_courses(records: &[GroupRecord]) -> Vec<Course> {
    // course name -> link buckets, both in first-appearance order
    let mut course_names: Vec<&str> = Vec::new();
    let mut buckets: Vec<Vec<LinkBucket>> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let Some(kind) = ComponentKind::from_code(&record.component) else {
            continue;
        };
        let Some(key) = link_key(&record.group) else {
            continue;
        };

        let course_pos = match course_names.iter().position(|&n| n == record.course) {
            Some(pos) => pos,
            None => {
                course_names.push(&record.course);
                buckets.push(Vec::new());
                course_names.len() - 1
            }
        };

        let links = &mut buckets[course_pos];
        let link_pos = match links.iter().position(|l| l.key == key) {
            Some(pos) => pos,
            None => {
                links.push(LinkBucket {
                    key,
                    ..LinkBucket::default()
                });
                links.len() - 1
            }
        };

        // ComponentKind discriminants follow ALL order.
        links[link_pos].groups[kind as usize].push(idx);
    }

    let mut courses = Vec::new();
    for (name, links) in course_names.into_iter().zip(buckets) {
        let mut course = Course::new(name);
        for link in links {
            for option in link_options(&link, records) {
                course.add_option(option);
            }
        }
        if course.has_options() {
            courses.push(course);
        }
    }
    courses
}

/// Cartesian product across one link key's non-empty component buckets.
///
/// Each product member becomes one option: sessions concatenated in
/// component order, label joining the group names with `+`.
fn link_options(link: &LinkBucket, records: &[GroupRecord]) -> Vec<GroupOption> {
    let choices: Vec<&Vec<usize>> = link.groups.iter().filter(|g| !g.is_empty()).collect();
    if choices.is_empty() {
        return Vec::new();
    }

    let mut options = Vec::new();
    let mut indices = vec![0usize; choices.len()];
    loop {
        let mut sessions = Vec::new();
        let mut labels = Vec::new();
        for (bucket, &i) in choices.iter().zip(&indices) {
            let record = &records[bucket[i]];
            labels.push(record.group.as_str());
            sessions.extend(record.sessions.iter().cloned());
        }
        options.push(GroupOption::new(sessions).with_label(labels.join("+")));

        if !advance(&mut indices, &choices) {
            return options;
        }
    }
}

/// Odometer step over the component choices; false when exhausted.
fn advance(indices: &mut [usize], choices: &[&Vec<usize>]) -> bool {
    for slot in (0..indices.len()).rev() {
        indices[slot] += 1;
        if indices[slot] < choices[slot].len() {
            return true;
        }
        indices[slot] = 0;
    }
    false
}

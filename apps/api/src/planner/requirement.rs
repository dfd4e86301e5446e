//! Requirement labels: parsed once into a tagged kind when a template is loaded.
//!
//! A label is classified in this order:
//! - contains `" or "` (any case)  → `AnyOf`, split on the lowercase `" or "` only
//! - contains `"elective"` (any case) → `ElectiveCategory`
//! - otherwise                     → `Single`

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const OR_SEPARATOR: &str = " or ";
const ELECTIVE_MARKER: &str = "elective";

/// A normalized course identifier such as `CSCI 111`.
///
/// Normalization is trim + upper-case, and equality is exact on the normalized
/// string. There is no fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseRef(String);

impl CourseRef {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }
}

/// The set of courses a student has on record. Retakes collapse to one member.
/// Grades are not consulted: any recorded course counts.
#[derive(Debug, Clone, Default)]
pub struct CompletedCourses(HashSet<CourseRef>);

impl CompletedCourses {
    pub fn contains(&self, course: &CourseRef) -> bool {
        self.0.contains(course)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CompletedCourses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| CourseRef::new(c.as_ref())).collect())
    }
}

/// What a template slot asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementKind {
    /// One specific course.
    Single(CourseRef),
    /// Any one of several courses ("WRIT 100 or WRIT 101").
    AnyOf(Vec<CourseRef>),
    /// A free-form category ("Minor/Tech Elective"). Cannot be matched against
    /// specific courses, so it is always outstanding.
    ElectiveCategory(String),
}

impl RequirementKind {
    /// Detection is case-insensitive but the split is not, so "A OR B" becomes a
    /// single option that no completed course can match.
    pub fn parse(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains(OR_SEPARATOR) {
            return RequirementKind::AnyOf(label.split(OR_SEPARATOR).map(CourseRef::new).collect());
        }
        if lowered.contains(ELECTIVE_MARKER) {
            return RequirementKind::ElectiveCategory(label.trim().to_string());
        }
        RequirementKind::Single(CourseRef::new(label))
    }

    pub fn is_satisfied_by(&self, completed: &CompletedCourses) -> bool {
        match self {
            RequirementKind::Single(course) => completed.contains(course),
            RequirementKind::AnyOf(options) => options.iter().any(|o| completed.contains(o)),
            RequirementKind::ElectiveCategory(_) => false,
        }
    }
}

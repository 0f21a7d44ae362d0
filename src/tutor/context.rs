//! Educational context for a tutoring session
//!
//! Builds the instruction text that frames the model as a tutor for a given
//! form and subject.

use super::subjects::Subject;
use serde::{Deserialize, Serialize};

/// Age band used when the grade level is not one of the known forms
const DEFAULT_AGE_RANGE: &str = "13-18";

/// Grade level as supplied by the caller, e.g. `"3"`.
///
/// Kept as the raw label so malformed values still flow through and fall back
/// to default behavior instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeLevel(String);

/// Coarse split of the forms used to pick starter variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    /// Forms 1 and 2
    Lower,
    /// Forms 3 to 5, and anything unrecognized
    Upper,
}

impl GradeLevel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Grade level for form `n`
    pub fn of(n: u8) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form number, if the label names one of forms 1 to 5
    pub fn number(&self) -> Option<u8> {
        self.0
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=5).contains(n))
    }

    /// Approximate student age range for this form
    pub fn age_range(&self) -> &'static str {
        match self.number() {
            Some(1) => "13-14",
            Some(2) => "14-15",
            Some(3) => "15-16",
            Some(4) => "16-17",
            Some(5) => "17-18",
            _ => DEFAULT_AGE_RANGE,
        }
    }

    pub fn band(&self) -> GradeBand {
        match self.number() {
            Some(1 | 2) => GradeBand::Lower,
            _ => GradeBand::Upper,
        }
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Form and subject a session is scoped to. Fixed for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectContext {
    pub grade_level: GradeLevel,
    pub subject_id: String,
    pub subject_title: String,
}

impl SubjectContext {
    pub fn new(
        grade_level: GradeLevel,
        subject_id: impl Into<String>,
        subject_title: impl Into<String>,
    ) -> Self {
        Self {
            grade_level,
            subject_id: subject_id.into(),
            subject_title: subject_title.into(),
        }
    }

    /// The catalog subject, if `subject_id` is a known key
    pub fn subject(&self) -> Option<Subject> {
        Subject::from_id(&self.subject_id)
    }
}

/// Build the tutor instruction for `context`.
///
/// Pure: the same context always yields byte-identical text.
pub fn format_educational_context(context: &SubjectContext) -> String {
    let grade = &context.grade_level;
    let mut text = format!(
        "You are an educational AI tutor for a Form {grade} student ({} years old) studying {}. \n  \
         Provide accurate, grade-appropriate answers that are helpful, educational, and easy to understand.\n  \
         Always provide explanations that would be suitable for a student at this academic level.\n  \
         If you don't know the answer to something, acknowledge this rather than making up information.",
        grade.age_range(),
        context.subject_title,
    );

    if let Some(subject) = context.subject() {
        text.push_str("\n\n");
        text.push_str(subject.background());
    }

    text
}

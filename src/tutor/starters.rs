//! Conversation starters offered when a session opens

use super::context::{GradeBand, GradeLevel};
use super::subjects::Subject;

/// Subject-agnostic suggestions, always offered last
const COMMON_STARTERS: [&str; 3] = [
    "How can I help with your studies today?",
    "What topic are you working on right now?",
    "Do you have any homework questions I can help with?",
];

fn subject_starters(subject: Subject, band: GradeBand) -> [&'static str; 2] {
    match (subject, band) {
        (Subject::Mathematics, GradeBand::Lower) => [
            "Would you like to practice basic algebra?",
            "Having trouble with a math problem?",
        ],
        (Subject::Mathematics, GradeBand::Upper) => [
            "Would you like to work on some calculus problems?",
            "Having trouble with a math problem?",
        ],
        (Subject::Science, GradeBand::Lower) => [
            "Let's learn about basic science concepts!",
            "Need help with a science experiment or concept?",
        ],
        (Subject::Science, GradeBand::Upper) => [
            "Do you want to dive into advanced scientific theories?",
            "Need help with a science experiment or concept?",
        ],
        (Subject::English, _) => [
            "Need help with grammar or writing?",
            "Would you like to improve your vocabulary?",
        ],
        (Subject::BahasaMelayu, _) => [
            "Perlukan bantuan dengan tatabahasa atau penulisan?",
            "Adakah anda ingin mempelajari peribahasa?",
        ],
        (Subject::Sejarah, _) => [
            "Perlukan bantuan dengan fakta sejarah?",
            "Mari pelajari tentang tokoh-tokoh penting dalam sejarah!",
        ],
    }
}

/// Suggested prompts for a form and subject.
///
/// Subject-specific entries come first, then the common ones. Unknown
/// subjects get only the common entries. Deterministic, and the iterator can
/// be recreated at will by calling again.
pub fn starters(
    grade_level: &GradeLevel,
    subject_id: &str,
) -> impl Iterator<Item = &'static str> + Clone {
    let specific = Subject::from_id(subject_id)
        .map(|s| subject_starters(s, grade_level.band()))
        .into_iter()
        .flatten();

    specific.chain(COMMON_STARTERS)
}

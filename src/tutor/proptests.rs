//! Property-based tests for the tutor core
//!
//! - Unknown grade labels always fall back to the widest age band
//! - The instruction text is a pure function of the context
//! - Starter lists stay within bounds and end with the common entries
//! - Any sequence of appends yields N+1 turns in call order with unique ids

use super::context::{format_educational_context, GradeLevel, SubjectContext};
use super::session::{Sender, Session};
use super::starters::starters;
use super::subjects::Subject;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_subject_id() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => proptest::sample::select(Subject::ALL.map(Subject::id).to_vec())
            .prop_map(String::from),
        1 => "[a-z-]{1,15}",
    ]
}

fn arb_grade_label() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..=5).prop_map(|n| n.to_string()),
        any::<i64>().prop_map(|n| n.to_string()),
        ".{0,8}",
    ]
}

proptest! {
    #[test]
    fn unknown_grades_use_default_band(n in any::<i64>()) {
        prop_assume!(!(1..=5).contains(&n));
        prop_assert_eq!(GradeLevel::new(n.to_string()).age_range(), "13-18");
    }

    #[test]
    fn instruction_is_pure(grade in arb_grade_label(), subject in arb_subject_id(), title in "[A-Za-z ]{1,20}") {
        let ctx = SubjectContext::new(GradeLevel::new(grade), subject, title.clone());
        let first = format_educational_context(&ctx);
        let second = format_educational_context(&ctx);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains(&title));
        prop_assert!(first.contains(ctx.grade_level.age_range()));
    }

    #[test]
    fn starters_are_bounded(grade in arb_grade_label(), subject in arb_subject_id()) {
        let list: Vec<_> = starters(&GradeLevel::new(grade), &subject).collect();
        prop_assert!((2..=5).contains(&list.len()));
        prop_assert_eq!(list.last().copied(), Some("Do you have any homework questions I can help with?"));
    }

    #[test]
    fn appends_preserve_order_and_identity(ops in proptest::collection::vec((any::<bool>(), "[a-z ]{1,20}"), 0..40)) {
        let mut session = Session::initialize(SubjectContext::new(
            GradeLevel::of(3),
            "mathematics",
            "Mathematics",
        ));

        let mut appended = Vec::new();
        for (is_user, text) in &ops {
            let turn = if *is_user {
                session.append_user(text.as_str())
            } else {
                session.append_assistant(text.as_str())
            };
            appended.push(turn);
        }

        let turns = session.turns();
        prop_assert_eq!(turns.len(), ops.len() + 1);
        prop_assert_eq!(turns[0].sender(), Sender::Assistant);
        prop_assert_eq!(&turns[1..], appended.as_slice());

        let ids: HashSet<_> = turns.iter().map(|t| t.id()).collect();
        prop_assert_eq!(ids.len(), turns.len());
    }
}

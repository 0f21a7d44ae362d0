//! Property-based tests for the Pomodoro state machine
//!
//! Invariants checked over arbitrary event sequences:
//! - Seconds left never exceed the active mode's duration
//! - A ticker is started only when entering a counting state and stopped
//!   only when leaving one
//! - The completed count never decreases and grows by at most one per event
//! - Rejected events are reported, never silently applied

use super::state::{Pomodoro, TimerMode, TimerState};
use super::transition::transition;
use super::{Effect, Event};
use proptest::prelude::*;

fn arb_mode() -> impl Strategy<Value = TimerMode> {
    prop_oneof![
        Just(TimerMode::Focus),
        Just(TimerMode::ShortBreak),
        Just(TimerMode::LongBreak),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        2 => Just(Event::Start),
        1 => Just(Event::Pause),
        1 => Just(Event::Reset),
        8 => Just(Event::Tick),
        1 => (arb_mode(), any::<bool>())
            .prop_map(|(mode, confirmed)| Event::SwitchMode { mode, confirmed }),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_over_event_sequences(events in proptest::collection::vec(arb_event(), 0..300)) {
        let mut timer = Pomodoro::default();

        for event in events {
            let Ok(result) = transition(&timer, event) else {
                continue;
            };
            let next = result.new_state;

            prop_assert!(next.seconds_left <= next.mode.duration_secs());
            prop_assert!(next.completed >= timer.completed);
            prop_assert!(next.completed - timer.completed <= 1);

            let started = result.effects.contains(&Effect::StartTicker);
            let stopped = result.effects.contains(&Effect::StopTicker);
            prop_assert_eq!(started, !timer.state.is_counting() && next.state.is_counting());
            prop_assert_eq!(stopped, timer.state.is_counting() && !next.state.is_counting());

            timer = next;
        }
    }

    #[test]
    fn full_focus_interval_takes_exact_tick_count(completed in 0u32..20) {
        let mut timer = transition(
            &Pomodoro { completed, ..Pomodoro::default() },
            Event::Start,
        ).unwrap().new_state;

        let mut ticks = 0;
        while timer.state == TimerState::Running {
            timer = transition(&timer, Event::Tick).unwrap().new_state;
            ticks += 1;
        }

        prop_assert_eq!(ticks, TimerMode::Focus.duration_secs());
        prop_assert_eq!(timer.completed, completed + 1);
        prop_assert!(timer.mode.is_break());
    }
}

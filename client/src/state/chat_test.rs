use std::collections::HashSet;

use super::*;
use crate::analysis::script::{self, playback_plan};

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeded_log_contains_only_the_greeting() {
    let state = ChatState::seeded(0.0);
    assert_eq!(state.messages.len(), 1);
    let greeting = &state.messages[0];
    assert_eq!(greeting.text, script::GREETING);
    assert!(!greeting.is_user);
    assert!(greeting.id.starts_with("msg-"));
}

#[test]
fn default_log_is_empty() {
    assert!(ChatState::default().messages.is_empty());
}

// =============================================================
// Appending
// =============================================================

#[test]
fn push_appends_in_insertion_order() {
    let mut state = ChatState::seeded(0.0);
    state.push("erste", true, 1.0);
    state.push("zweite", false, 2.0);

    let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, [script::GREETING, "erste", "zweite"]);
}

#[test]
fn push_stores_author_and_timestamp() {
    let mut state = ChatState::default();
    state.push("hallo", true, 1234.5);
    let message = &state.messages[0];
    assert!(message.is_user);
    assert!((message.timestamp_ms - 1234.5).abs() < f64::EPSILON);
}

#[test]
fn message_ids_are_unique_within_a_session() {
    let mut state = ChatState::seeded(0.0);
    for i in 0..100 {
        state.push(format!("nachricht {i}"), i % 2 == 0, f64::from(i));
    }
    let ids: HashSet<_> = state.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), state.messages.len());
}

// =============================================================
// Full-run bookkeeping
// =============================================================

/// Simulates N completed submissions: each appends the user caption plus the
/// thirteen planned messages, so the log holds 1 + 14N entries, ending with
/// the punchline.
#[test]
fn completed_submissions_grow_the_log_by_fourteen() {
    let mut state = ChatState::seeded(0.0);

    for run in 1..=3 {
        state.push(script::USER_CAPTION, true, 0.0);
        for entry in playback_plan(|| 0.5) {
            state.push(entry.text, false, 0.0);
        }
        assert_eq!(state.messages.len(), 1 + 14 * run);
        let last = state.messages.last().unwrap();
        assert_eq!(last.text, script::PUNCHLINE);
        assert!(!last.is_user);
    }
}

#[test]
fn single_run_produces_the_expected_relative_order() {
    let mut state = ChatState::seeded(0.0);
    state.push(script::USER_CAPTION, true, 0.0);
    for entry in playback_plan(|| 0.0) {
        state.push(entry.text, false, 0.0);
    }

    assert_eq!(state.messages.len(), 15);
    assert_eq!(state.messages[1].text, script::USER_CAPTION);
    for (message, expected) in state.messages[2..12].iter().zip(script::ANALYSIS_STEPS) {
        assert_eq!(message.text, expected);
    }
    assert_eq!(state.messages[12].text, script::ANALYSIS_COMPLETE);
    assert_eq!(state.messages[13].text, script::SOLUTION_LEAD_IN);
    assert_eq!(state.messages[14].text, script::PUNCHLINE);
}

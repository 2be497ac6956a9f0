//! Tests for the suggestion controller

use super::*;
use crate::locale::Language;
use crate::terms::TermText;
use crate::test_utils::test_helpers::{NavEvent, RecordingNavigator, suggestion};
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn three_items() -> Vec<Suggestion> {
    vec![
        suggestion("s1", "apple"),
        suggestion("s2", "application"),
        suggestion("s3", "apply"),
    ]
}

/// Type `text`, let the debounce elapse, and answer with `items`
fn shown_state(text: &str, items: Vec<Suggestion>) -> SuggestState {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query(text, t0);
    let ticket = state.tick(t0 + ms(300)).expect("lookup dispatched");
    state.apply_lookup(ticket.request_id, LookupOutcome::Found(items));
    state
}

#[test]
fn test_new_state_is_idle() {
    let state = SuggestState::default();
    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert!(state.query().is_empty());
    assert!(state.suggestions().is_empty());
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_short_query_stays_idle() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("a", t0);

    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert_eq!(state.tick(t0 + ms(1000)), None);
}

#[test]
fn test_whitespace_does_not_count_toward_minimum() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("  a  ", t0);

    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert_eq!(state.query(), "  a  ");
}

#[test]
fn test_minimum_counts_characters_not_bytes() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("ລ", t0);
    assert_eq!(state.phase(), SuggestPhase::Idle);

    state.set_query("ລາ", t0);
    assert_eq!(state.phase(), SuggestPhase::Debouncing);
}

#[test]
fn test_lookup_uses_trimmed_query() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("  ap ", t0);

    let ticket = state.tick(t0 + ms(300)).unwrap();
    assert_eq!(ticket.query, "ap");
    assert_eq!(state.phase(), SuggestPhase::Loading);
    assert!(state.is_loading());
}

#[test]
fn test_each_keystroke_restarts_window() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("ap", t0);
    state.set_query("app", t0 + ms(200));

    assert_eq!(state.tick(t0 + ms(300)), None);
    let ticket = state.tick(t0 + ms(500)).unwrap();
    assert_eq!(ticket.query, "app");
}

#[test]
fn test_shrinking_below_minimum_cancels_timer_and_clears() {
    let mut state = shown_state("ap", three_items());
    let t1 = Instant::now();
    state.set_query("app", t1);
    state.set_query("a", t1 + ms(10));

    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert!(state.suggestions().is_empty());
    assert_eq!(state.tick(t1 + ms(1000)), None);
}

#[test]
fn test_response_shows_list_and_resets_selection() {
    let state = shown_state("ap", three_items());
    assert_eq!(state.phase(), SuggestPhase::Shown);
    assert_eq!(state.suggestions().len(), 3);
    assert_eq!(state.selected_index(), None);
    assert!(!state.has_in_flight_request());
}

#[test]
fn test_empty_response_is_empty_phase() {
    let state = shown_state("zz", Vec::new());
    assert_eq!(state.phase(), SuggestPhase::Empty);
    assert!(state.is_open());
    assert!(!state.is_showing_list());
}

#[test]
fn test_failure_outcome_is_empty_phase() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("ap", t0);
    let ticket = state.tick(t0 + ms(300)).unwrap();

    assert!(state.apply_lookup(ticket.request_id, LookupOutcome::Empty));
    assert_eq!(state.phase(), SuggestPhase::Empty);
}

#[test]
fn test_out_of_order_responses_keep_latest() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("abc", t0);
    let first = state.tick(t0 + ms(300)).unwrap();
    state.set_query("abcd", t0 + ms(350));
    let second = state.tick(t0 + ms(650)).unwrap();

    assert!(state.apply_lookup(
        second.request_id,
        LookupOutcome::Found(vec![suggestion("d", "abcd result")])
    ));
    assert!(!state.apply_lookup(
        first.request_id,
        LookupOutcome::Found(vec![suggestion("c", "abc result")])
    ));

    assert_eq!(state.suggestions().len(), 1);
    assert_eq!(state.suggestions()[0].id, "d");
}

#[test]
fn test_response_arriving_while_debouncing_is_dropped() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("ap", t0);
    let ticket = state.tick(t0 + ms(300)).unwrap();
    state.set_query("app", t0 + ms(320));

    assert!(!state.apply_lookup(ticket.request_id, LookupOutcome::Found(three_items())));
    assert_eq!(state.phase(), SuggestPhase::Debouncing);
}

#[test]
fn test_response_after_clear_is_dropped() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("ap", t0);
    let ticket = state.tick(t0 + ms(300)).unwrap();
    state.clear();

    assert!(!state.apply_lookup(ticket.request_id, LookupOutcome::Found(three_items())));
    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert!(state.suggestions().is_empty());
}

#[test]
fn test_navigation_only_while_shown() {
    let mut state = shown_state("zz", Vec::new());
    state.navigate_next();
    assert_eq!(state.selected_index(), None);

    let mut state = shown_state("ap", three_items());
    state.navigate_next();
    state.navigate_next();
    assert_eq!(state.selected_index(), Some(1));
    state.navigate_previous();
    state.navigate_previous();
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_submit_search_hands_trimmed_query_to_navigator() {
    let mut state = shown_state(" apple ", three_items());
    let mut nav = RecordingNavigator::default();

    assert!(state.submit_search(&mut nav));
    assert_eq!(nav.events, vec![NavEvent::Search("apple".to_string())]);
    assert_eq!(state.phase(), SuggestPhase::Closed);
    assert_eq!(state.query(), " apple ");
}

#[test]
fn test_submit_search_with_blank_query_is_noop() {
    let mut state = SuggestState::default();
    state.set_query("   ", Instant::now());
    let mut nav = RecordingNavigator::default();

    assert!(!state.submit_search(&mut nav));
    assert!(nav.events.is_empty());
}

#[test]
fn test_submit_search_with_short_query_still_submits() {
    let mut state = SuggestState::default();
    state.set_query("a", Instant::now());
    let mut nav = RecordingNavigator::default();

    assert!(state.submit_search(&mut nav));
    assert_eq!(nav.events, vec![NavEvent::Search("a".to_string())]);
    assert_eq!(state.phase(), SuggestPhase::Idle);
}

#[test]
fn test_submit_cancels_pending_lookup() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    state.set_query("apple", t0);
    let mut nav = RecordingNavigator::default();
    state.submit_search(&mut nav);

    assert_eq!(state.tick(t0 + ms(1000)), None);
}

#[test]
fn test_select_suggestion_clears_query_and_navigates() {
    let items = three_items();
    let mut state = shown_state("ap", items.clone());
    let mut nav = RecordingNavigator::default();

    assert!(state.select_suggestion(&items[2], &mut nav));
    assert_eq!(nav.events, vec![NavEvent::Detail("s3".to_string())]);
    assert_eq!(state.phase(), SuggestPhase::Closed);
    assert!(state.query().is_empty());
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_select_unknown_suggestion_is_rejected() {
    let mut state = shown_state("ap", three_items());
    let mut nav = RecordingNavigator::default();
    let stranger = Suggestion::new("x", TermText::default().with(Language::En, "x"));

    assert!(!state.select_suggestion(&stranger, &mut nav));
    assert!(nav.events.is_empty());
    assert_eq!(state.phase(), SuggestPhase::Shown);
}

#[test]
fn test_dismiss_keeps_query_and_list() {
    let mut state = shown_state("ap", three_items());
    state.navigate_next();
    state.dismiss();

    assert_eq!(state.phase(), SuggestPhase::Closed);
    assert_eq!(state.query(), "ap");
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.suggestions().len(), 3);
}

#[test]
fn test_focus_reopens_kept_list_without_lookup() {
    let mut state = shown_state("ap", three_items());
    let before = state.current_request_id();
    state.dismiss();

    assert!(state.focus());
    assert_eq!(state.phase(), SuggestPhase::Shown);
    assert_eq!(state.current_request_id(), before);
    assert_eq!(state.tick(Instant::now() + ms(1000)), None);
}

#[test]
fn test_focus_without_list_does_nothing() {
    let mut state = shown_state("zz", Vec::new());
    state.dismiss();
    assert!(!state.focus());
    assert_eq!(state.phase(), SuggestPhase::Closed);
}

#[test]
fn test_edit_after_close_debounces_again() {
    let mut state = shown_state("ap", three_items());
    state.dismiss();
    state.set_query("apx", Instant::now());
    assert_eq!(state.phase(), SuggestPhase::Debouncing);
}

#[test]
fn test_refresh_reschedules_current_query() {
    let mut state = shown_state("ap", three_items());
    let t1 = Instant::now();
    state.refresh(t1);

    assert_eq!(state.phase(), SuggestPhase::Debouncing);
    let ticket = state.tick(t1 + ms(300)).unwrap();
    assert_eq!(ticket.query, "ap");
}

#[test]
fn test_clear_resets_everything() {
    let mut state = shown_state("ap", three_items());
    state.clear();
    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert!(state.query().is_empty());
    assert!(state.suggestions().is_empty());
}

#[test]
fn test_typing_to_selection_flow() {
    let t0 = Instant::now();
    let mut state = SuggestState::new(300, 2);
    let mut nav = RecordingNavigator::default();

    state.set_query("a", t0);
    assert_eq!(state.phase(), SuggestPhase::Idle);
    assert_eq!(state.tick(t0 + ms(100)), None);

    state.set_query("ap", t0 + ms(100));
    assert_eq!(state.phase(), SuggestPhase::Debouncing);
    let ticket = state.tick(t0 + ms(400)).unwrap();
    assert_eq!(state.phase(), SuggestPhase::Loading);

    let items = three_items();
    state.apply_lookup(ticket.request_id, LookupOutcome::Found(items.clone()));
    assert_eq!(state.phase(), SuggestPhase::Shown);
    assert_eq!(state.selected_index(), None);

    state.navigate_next();
    state.navigate_next();
    assert_eq!(state.selected_index(), Some(1));

    assert!(state.select_highlighted(&mut nav));
    assert_eq!(nav.events, vec![NavEvent::Detail(items[1].id.clone())]);
    assert_eq!(state.phase(), SuggestPhase::Closed);
    assert!(state.query().is_empty());
}

// Keystrokes spaced under the debounce window produce exactly one lookup,
// for the final query.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_debounce_coalesces_keystrokes(
        queries in prop::collection::vec("[a-z]{2,8}", 1..15),
        gaps in prop::collection::vec(0u64..300, 15),
    ) {
        let t0 = Instant::now();
        let mut state = SuggestState::new(300, 2);
        let mut now = t0;
        let mut tickets = Vec::new();

        for (query, gap) in queries.iter().zip(gaps.iter()) {
            now += ms(*gap);
            tickets.extend(state.tick(now));
            state.set_query(query, now);
        }
        tickets.extend(state.tick(now + ms(300)));

        prop_assert_eq!(tickets.len(), 1);
        prop_assert_eq!(&tickets[0].query, queries.last().unwrap());
    }

    #[test]
    fn prop_short_queries_never_dispatch(query in "[a-z ]{0,1} {0,3}") {
        let t0 = Instant::now();
        let mut state = SuggestState::new(300, 2);
        state.set_query(&query, t0);
        prop_assert_eq!(state.phase(), SuggestPhase::Idle);
        prop_assert_eq!(state.tick(t0 + ms(5000)), None);
    }
}

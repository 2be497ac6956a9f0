//! Tests for selection state management

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_selection_state() {
    let state = SelectionState::new();
    assert!(state.get_selected().is_none());
    assert_eq!(state.as_signed(), -1);
}

#[test]
fn test_navigate_next_from_none() {
    let mut state = SelectionState::new();
    state.navigate_next(3);
    assert_eq!(state.get_selected(), Some(0));
}

#[test]
fn test_navigate_next_wraps() {
    let mut state = SelectionState::new();
    state.select_index(2, 3);
    state.navigate_next(3);
    assert_eq!(state.get_selected(), Some(0));
}

#[test]
fn test_navigate_previous_from_first_clears() {
    let mut state = SelectionState::new();
    state.select_index(0, 3);
    state.navigate_previous(3);
    assert_eq!(state.get_selected(), None);
    assert_eq!(state.as_signed(), -1);
}

#[test]
fn test_navigate_previous_from_none_stays_none() {
    let mut state = SelectionState::new();
    state.navigate_previous(3);
    assert_eq!(state.get_selected(), None);
}

#[test]
fn test_select_index_out_of_range_ignored() {
    let mut state = SelectionState::new();
    state.select_index(5, 3);
    assert_eq!(state.get_selected(), None);
}

#[test]
fn test_navigate_with_zero_suggestions_clears() {
    let mut state = SelectionState::new();
    state.select_index(1, 3);
    state.navigate_next(0);
    assert!(state.get_selected().is_none());

    state.select_index(1, 3);
    state.navigate_previous(0);
    assert!(state.get_selected().is_none());
}

#[test]
fn test_two_downs_land_on_second_item() {
    let mut state = SelectionState::new();
    state.navigate_next(3);
    state.navigate_next(3);
    assert_eq!(state.get_selected(), Some(1));
}

// For N suggestions: Down from N-1 yields 0, Up from 0 yields none,
// Up from none stays none.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_boundary_behavior(suggestion_count in 1usize..20) {
        let mut state = SelectionState::new();
        state.select_index(suggestion_count - 1, suggestion_count);
        state.navigate_next(suggestion_count);
        prop_assert_eq!(state.get_selected(), Some(0));

        state.navigate_previous(suggestion_count);
        prop_assert_eq!(state.get_selected(), None);

        state.navigate_previous(suggestion_count);
        prop_assert_eq!(state.get_selected(), None);
    }

    #[test]
    fn prop_selection_stays_in_bounds(
        suggestion_count in 1usize..20,
        moves in prop::collection::vec(prop::bool::ANY, 0..50),
    ) {
        let mut state = SelectionState::new();
        for down in moves {
            if down {
                state.navigate_next(suggestion_count);
            } else {
                state.navigate_previous(suggestion_count);
            }
            let signed = state.as_signed();
            prop_assert!(signed >= -1 && signed < suggestion_count as i64);
        }
    }
}

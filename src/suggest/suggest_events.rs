use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::suggest_state::SuggestState;
use crate::navigation::Navigator;

/// Keyboard policy of the search box
///
/// Returns true when the key was consumed. Anything else (typing, cursor
/// movement) belongs to the text input.
pub fn handle_suggest_key(
    state: &mut SuggestState,
    key: KeyEvent,
    navigator: &mut dyn Navigator,
) -> bool {
    match key.code {
        KeyCode::Down if state.is_showing_list() => {
            state.navigate_next();
            true
        }
        KeyCode::Up if state.is_showing_list() => {
            state.navigate_previous();
            true
        }
        KeyCode::Enter => {
            if state.is_showing_list() && state.select_highlighted(navigator) {
                return true;
            }
            state.submit_search(navigator);
            true
        }
        KeyCode::Esc if state.is_open() => {
            state.dismiss();
            true
        }
        _ => false,
    }
}

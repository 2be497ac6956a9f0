//! Mouse hover handling
//!
//! Moving the pointer over a dropdown row highlights it, the same as
//! reaching it with the arrow keys.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use super::mouse_click::suggestion_index_at;
use crate::layout::Region;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region != Some(Region::SuggestionPopup) {
        return;
    }
    if let Some(index) = suggestion_index_at(app, mouse) {
        app.suggest.highlight(index);
    }
}

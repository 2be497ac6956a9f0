//! Mouse click handling
//!
//! A click on a dropdown row selects that suggestion. A click anywhere
//! outside the search box and the dropdown closes the dropdown.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::{App, Focus};
use crate::layout::{Region, suggestion_row_at};
use crate::suggest::suggest_render::visible_window;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::SuggestionPopup) => click_suggestion(app, mouse),
        Some(Region::SearchInput) => click_search_input(app),
        Some(Region::Page) => {
            app.suggest.dismiss();
            app.set_focus(Focus::Page);
        }
        _ => app.suggest.dismiss(),
    }
}

/// Index into the suggestion list of the row under the pointer
pub(super) fn suggestion_index_at(app: &App, mouse: MouseEvent) -> Option<usize> {
    if !app.suggest.is_showing_list() {
        return None;
    }
    let popup = app.layout_regions.suggestion_popup?;
    let row = suggestion_row_at(popup, mouse.column, mouse.row)?;
    let (start, end) = visible_window(
        app.suggest.selected_index(),
        app.suggest.suggestions().len(),
        app.max_visible_suggestions,
    );
    let index = start + row;
    (index < end).then_some(index)
}

fn click_suggestion(app: &mut App, mouse: MouseEvent) {
    let Some(index) = suggestion_index_at(app, mouse) else {
        return;
    };
    let Some(item) = app.suggest.suggestions().get(index).cloned() else {
        return;
    };

    let before = app.router.current().clone();
    if app.suggest.select_suggestion(&item, &mut app.router) {
        app.after_suggest_navigation(&before);
    }
}

fn click_search_input(app: &mut App) {
    if app.focus != Focus::Input {
        app.set_focus(Focus::Input);
    } else {
        app.suggest.focus();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;

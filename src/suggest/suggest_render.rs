//! Suggestion dropdown rendering
//!
//! Draws the dropdown directly below the search input: the suggestion list,
//! or a single line for the loading and "no results" states.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::suggest_state::{SuggestPhase, SuggestState};
use crate::locale::{Language, Messages};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const HIGHLIGHT_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";

/// Range of items shown when the list is longer than the popup
///
/// Keeps the highlighted item on screen, scrolling only once it moves past
/// the last visible row.
pub fn visible_window(selected: Option<usize>, len: usize, max_visible: usize) -> (usize, usize) {
    let max_visible = max_visible.max(1);
    let start = match selected {
        Some(idx) if idx >= max_visible => idx + 1 - max_visible,
        _ => 0,
    };
    (start, (start + max_visible).min(len))
}

/// Render the dropdown; returns the area drawn, if any
pub fn render_suggestions(
    frame: &mut Frame,
    state: &SuggestState,
    language: Language,
    messages: &Messages,
    input_area: Rect,
    max_visible: usize,
) -> Option<Rect> {
    let lines = match state.phase() {
        SuggestPhase::Loading => vec![status_line(
            messages.translate("home.search.loading"),
            Color::Yellow,
        )],
        SuggestPhase::Empty => vec![status_line(
            messages.translate("home.search.noResults"),
            Color::DarkGray,
        )],
        SuggestPhase::Shown => suggestion_lines(state, language, input_area.width, max_visible),
        SuggestPhase::Idle | SuggestPhase::Debouncing | SuggestPhase::Closed => return None,
    };

    let height = lines.len() as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(input_area, input_area.width, height, frame.area());
    if area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    popup::clear_area(frame, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
    frame.render_widget(List::new(items).block(block), area);

    Some(area)
}

fn status_line(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}{}", PLAIN_MARKER, text),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    ))
}

fn suggestion_lines(
    state: &SuggestState,
    language: Language,
    popup_width: u16,
    max_visible: usize,
) -> Vec<Line<'static>> {
    let suggestions = state.suggestions();
    let selected = state.selected_index();
    let (start, end) = visible_window(selected, suggestions.len(), max_visible);
    let inner_width = popup_width.saturating_sub(POPUP_BORDER_HEIGHT) as usize;

    suggestions[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let is_selected = selected == Some(start + offset);
            let marker = if is_selected { HIGHLIGHT_MARKER } else { PLAIN_MARKER };
            let title = item.title(language);
            let badge = item
                .category_name
                .as_deref()
                .map(|name| format!(" [{}]", name))
                .unwrap_or_default();

            let used = marker.width() + title.width() + badge.width();
            let padding = " ".repeat(inner_width.saturating_sub(used));

            let (title_style, badge_style) = if is_selected {
                (
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                )
            } else {
                (
                    Style::default().fg(Color::White),
                    Style::default().fg(Color::DarkGray),
                )
            };

            Line::from(vec![
                Span::styled(format!("{}{}", marker, title), title_style),
                Span::styled(format!("{}{}", padding, badge), badge_style),
            ])
        })
        .collect()
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;

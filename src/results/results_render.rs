use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::terms::card_render::{card_height, render_card};
use crate::terms::{CardVariant, TermCard};

const SUMMARY_ROWS: u16 = 2;

fn summary_line(app: &App) -> Line<'_> {
    let results = &app.results;
    let messages = &app.messages;

    if results.is_loading() {
        return Line::from(Span::styled(
            messages.translate("results.loading"),
            Style::default().fg(Color::Yellow),
        ));
    }
    if results.has_no_results() {
        return Line::from(Span::styled(
            format!("{} \"{}\"", messages.translate("results.empty"), results.query()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(vec![
        Span::styled(
            results.total().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} \"{}\"",
            messages.translate("results.total"),
            results.query()
        )),
    ])
}

/// First card to draw so the cursor stays on screen
fn first_visible(cursor: usize, card_rows: u16, available: u16) -> usize {
    let per_page = usize::from((available / card_rows.max(1)).max(1));
    if cursor < per_page {
        0
    } else {
        cursor + 1 - per_page
    }
}

/// Results page: summary line then compact cards
pub fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let summary_area = Rect {
        height: SUMMARY_ROWS.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(summary_line(app)), summary_area);

    let results = &app.results;
    if results.terms().is_empty() {
        return;
    }

    let cards: Vec<TermCard> = results
        .terms()
        .iter()
        .map(|term| {
            TermCard::new(
                term,
                app.language,
                CardVariant::Compact,
                results.is_favorite(&term.id),
            )
        })
        .collect();

    let list_top = area.y + summary_area.height;
    let available = area.bottom().saturating_sub(list_top);
    let card_rows = cards.first().map(card_height).unwrap_or(1);
    let start = first_visible(results.cursor(), card_rows, available);

    let mut y = list_top;
    for (index, card) in cards.iter().enumerate().skip(start) {
        let height = card_height(card);
        if y + height > area.bottom() {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_card(frame, card_area, card, &app.messages, index == results.cursor());
        y += height;
    }
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;

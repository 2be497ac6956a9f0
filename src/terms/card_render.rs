//! Term card rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::card::{CardVariant, TermCard};
use super::term::{Level, Source};
use crate::locale::Messages;

const COMPACT_DEFINITION_ROWS: u16 = 2;
const FULL_DEFINITION_ROWS: u16 = 4;
const BORDER_ROWS: u16 = 2;

/// Rows a card occupies, borders included
pub fn card_height(card: &TermCard) -> u16 {
    let meta = u16::from(card.category.is_some());
    match card.variant {
        CardVariant::Compact => BORDER_ROWS + 1 + meta + COMPACT_DEFINITION_ROWS + 1,
        CardVariant::Full => {
            let tags = u16::from(!card.tags.is_empty());
            BORDER_ROWS + 1 + meta + FULL_DEFINITION_ROWS + tags + 1
        }
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Basic => Color::Green,
        Level::Intermediate => Color::Yellow,
        Level::Advanced => Color::Red,
    }
}

fn source_color(source: Source) -> Color {
    match source {
        Source::Ai => Color::Magenta,
        Source::Manual => Color::Blue,
        Source::Contribution => Color::Cyan,
        Source::Import => Color::Gray,
    }
}

fn title_line<'a>(card: &'a TermCard, messages: &'a Messages) -> Line<'a> {
    let mut spans = vec![Span::styled(
        card.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(source) = card.source {
        let label = messages.translate(source_key(source));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} {}", source.icon(), label),
            Style::default().fg(source_color(source)),
        ));
    }

    let heart = if card.is_favorite { "♥" } else { "♡" };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(heart, Style::default().fg(Color::Red)));
    Line::from(spans)
}

fn source_key(source: Source) -> &'static str {
    match source {
        Source::Manual => "term.source.manual",
        Source::Ai => "term.source.ai",
        Source::Contribution => "term.source.contribution",
        Source::Import => "term.source.import",
    }
}

fn level_key(level: Level) -> &'static str {
    match level {
        Level::Basic => "term.level.basic",
        Level::Intermediate => "term.level.intermediate",
        Level::Advanced => "term.level.advanced",
    }
}

fn meta_line<'a>(card: &'a TermCard, messages: &'a Messages) -> Option<Line<'a>> {
    let category = card.category.as_deref()?;
    let mut spans = vec![Span::styled(
        format!("# {}", category),
        Style::default().fg(Color::Cyan),
    )];
    if let Some(level) = card.level {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("★ {}", messages.translate(level_key(level))),
            Style::default().fg(level_color(level)),
        ));
    }
    Some(Line::from(spans))
}

fn tags_line(card: &TermCard) -> Option<Line<'_>> {
    if card.tags.is_empty() {
        return None;
    }
    let tag_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut spans = Vec::new();
    for tag in &card.tags {
        spans.push(Span::styled(format!(" {} ", tag), tag_style));
        spans.push(Span::raw(" "));
    }
    if let Some(more) = card.overflow_marker() {
        spans.push(Span::styled(more, Style::default().fg(Color::DarkGray)));
    }
    Some(Line::from(spans))
}

fn stats_line<'a>(card: &'a TermCard, messages: &'a Messages) -> Line<'a> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(format!("👁 {} {}", card.views, messages.translate("term.views")), dim),
        Span::raw("  "),
        Span::styled(
            format!("♥ {} {}", card.favorites, messages.translate("term.favorites")),
            dim,
        ),
    ];
    if let Some(searches) = &card.searches {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("🔍 {} {}", searches, messages.translate("term.searches")),
            dim,
        ));
    }
    Line::from(spans)
}

/// Draw one card filling `area`
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &TermCard,
    messages: &Messages,
    highlighted: bool,
) {
    let definition_rows = match card.variant {
        CardVariant::Compact => COMPACT_DEFINITION_ROWS,
        CardVariant::Full => FULL_DEFINITION_ROWS,
    };

    let mut lines = vec![title_line(card, messages)];
    lines.extend(meta_line(card, messages));

    // Definition gets its own paragraph so wrapping stays inside its rows
    let header_rows = lines.len() as u16;
    let border_style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_area = Rect { height: header_rows.min(inner.height), ..inner };
    frame.render_widget(Paragraph::new(lines), header_area);

    let definition_area = Rect {
        y: inner.y + header_area.height,
        height: definition_rows.min(inner.height.saturating_sub(header_area.height)),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(card.definition.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        definition_area,
    );

    let mut footer = Vec::new();
    footer.extend(tags_line(card));
    footer.push(stats_line(card, messages));
    let footer_y = definition_area.y + definition_area.height;
    let footer_area = Rect {
        y: footer_y,
        height: (footer.len() as u16).min(inner.bottom().saturating_sub(footer_y)),
        ..inner
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}

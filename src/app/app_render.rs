use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::{App, Focus};
use crate::navigation::Route;
use crate::results::results_render::render_results;
use crate::suggest::suggest_render::render_suggestions;
use crate::terms::card_render::{card_height, render_card};
use crate::terms::{CardVariant, TermCard};
use crate::widgets::popup;

const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const MESSAGE_BOX_WIDTH: u16 = 64;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [header_area, input_area, page_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(frame.area());

        render_header(self, frame, header_area);
        frame.render_widget(&self.input, input_area);
        render_page(self, frame, page_area);
        render_footer(self, frame, footer_area);

        self.layout_regions.header = Some(header_area);
        self.layout_regions.search_input = Some(input_area);
        self.layout_regions.page = Some(page_area);
        self.layout_regions.footer = Some(footer_area);

        // Dropdown last so it draws over the page
        if self.focus == Focus::Input {
            self.layout_regions.suggestion_popup = render_suggestions(
                frame,
                &self.suggest,
                self.language,
                &self.messages,
                input_area,
                self.max_visible_suggestions,
            );
        }
    }

    fn page_title_key(&self) -> &'static str {
        match self.router.current() {
            Route::Home => "header.home",
            Route::SearchResults { .. } => "results.title",
            Route::TermDetail { .. } => "term.viewDetails",
            Route::Login => "login.title",
            Route::NotFound { .. } => "notFound.title",
        }
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let left = Line::from(vec![
        Span::styled(
            app.messages.translate("app.name"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.messages.translate(app.page_title_key()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {}", app.location()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let auth = match app.auth.user() {
        Some(user) => format!(
            "{} ({})",
            user.full_name,
            app.messages.translate(&format!("header.role.{}", user.role.key()))
        ),
        None => format!(
            "{} · {}: glossa login",
            app.messages.translate("header.guest"),
            app.messages.translate("header.login")
        ),
    };
    let right_text = format!(
        "{}: {}  │  {} ",
        app.messages.translate("header.language"),
        app.language.native_name(),
        auth
    );
    let right_width = (right_text.width() as u16).min(inner.width);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Right),
        right_area,
    );
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let lines = vec![
        Line::from(Span::styled(
            app.messages.translate("footer.keys"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "© {} {}. {}",
                year,
                app.messages.translate("app.name"),
                app.messages.translate("footer.rights")
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    match app.router.current() {
        Route::Home => render_home(app, frame, area),
        Route::SearchResults { .. } => render_results(app, frame, area),
        Route::TermDetail { id } => render_term_detail(app, frame, area, id),
        Route::Login => render_message_box(
            frame,
            area,
            app.messages.translate("login.title"),
            vec![app.messages.translate("login.body").to_string()],
        ),
        Route::NotFound { path } => render_message_box(
            frame,
            area,
            app.messages.translate("notFound.title"),
            vec![
                app.messages.translate("notFound.body").to_string(),
                path.clone(),
                String::new(),
                format!("Esc: {}", app.messages.translate("notFound.back")),
            ],
        ),
    }
}

fn render_home(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.messages.translate("app.tagline"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.messages.translate("home.welcome")),
        Line::from(Span::styled(
            app.messages.translate("home.hint"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let box_area = popup::centered_popup(area, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        box_area,
    );
}

fn render_term_detail(app: &App, frame: &mut Frame, area: Rect, id: &str) {
    if let Some(term) = app.results.find_term(id) {
        let card = TermCard::new(
            term,
            app.language,
            CardVariant::Full,
            app.results.is_favorite(id),
        );
        let card_area = Rect {
            height: card_height(&card).min(area.height),
            ..area
        };
        render_card(frame, card_area, &card, &app.messages, true);
        return;
    }

    let mut body = Vec::new();
    if let Some(suggestion) = app.known_suggestions.get(id) {
        let title = suggestion.title(app.language).to_string();
        let category = suggestion
            .category_name
            .clone()
            .unwrap_or_else(|| suggestion.category.clone());
        body.push(title);
        if !category.is_empty() {
            body.push(format!("# {}", category));
        }
        body.push(String::new());
    }
    body.push(app.messages.translate("term.notLoaded").to_string());
    render_message_box(frame, area, app.messages.translate("term.viewDetails"), body);
}

/// Rows `body` takes once wrapped inside the box borders
fn wrapped_rows(body: &[String], inner_width: u16) -> u16 {
    let inner_width = usize::from(inner_width.max(1));
    body.iter()
        .map(|line| (line.width() / inner_width + 1) as u16)
        .sum()
}

fn render_message_box(frame: &mut Frame, area: Rect, title: &str, body: Vec<String>) {
    let width = MESSAGE_BOX_WIDTH.min(area.width);
    let height = wrapped_rows(&body, width.saturating_sub(2)) + 2;
    let box_area = popup::centered_popup(area, MESSAGE_BOX_WIDTH, height);
    popup::clear_area(frame, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));
    let lines: Vec<Line> = body.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        box_area,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

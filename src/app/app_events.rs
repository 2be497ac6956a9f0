use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tui_textarea::{Input, Key};

use super::app_state::{App, Focus};
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;
use crate::navigation::Route;
use crate::suggest::suggest_events::handle_suggest_key;

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region, mouse),
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            _ => {}
        }
    }

    /// Keys that work regardless of focus
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.change_language(self.language.next(), Instant::now());
                true
            }
            KeyCode::Char('x') if ctrl => {
                self.clear_query();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let next = match self.focus {
                    Focus::Input => Focus::Page,
                    Focus::Page => Focus::Input,
                };
                self.set_focus(next);
                true
            }
            _ => false,
        }
    }

    /// Clear button: empty search box, no suggestions
    pub fn clear_query(&mut self) {
        self.set_input_text("");
        self.suggest.clear();
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let before = self.router.current().clone();
        if handle_suggest_key(&mut self.suggest, key, &mut self.router) {
            self.after_suggest_navigation(&before);
            return;
        }

        let input = Input::from(key);
        if inserts_newline(&input) {
            return;
        }
        if self.input.input(input) {
            let text = self.query_text();
            self.suggest.set_query(&text, Instant::now());
        }
    }

    /// Sync the search box and the new page after the dropdown navigated
    pub(super) fn after_suggest_navigation(&mut self, before: &Route) {
        if self.suggest.query().is_empty() && !self.query_text().is_empty() {
            self.set_input_text("");
        }
        if self.router.current() != before {
            self.on_route_changed();
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        if matches!(self.router.current(), Route::SearchResults { .. })
            && crate::results::results_events::handle_results_key(self, key)
        {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.set_focus(Focus::Input),
            KeyCode::Esc | KeyCode::Backspace => {
                if !self.go_back() && self.router.current() != &Route::Home {
                    self.navigate(Route::Home);
                }
            }
            _ => {}
        }
    }
}

/// The search box is a single line; these would split it
fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter | Key::Char('\n') | Key::Char('\r') => true,
        Key::Char('m') | Key::Char('j') => input.ctrl,
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

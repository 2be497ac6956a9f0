use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::error::GlossaError;
use crate::layout::LayoutRegions;
use crate::locale::routing::{LocaleMatch, resolve};
use crate::locale::{Language, Messages};
use crate::navigation::{Route, Router};
use crate::results::ResultsState;
use crate::service::{Worker, WorkerRequest, WorkerResponse};
use crate::session::{AuthSession, KeyValueStore, store_language, stored_language};
use crate::suggest::{SuggestState, Suggestion};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Page,
}

/// Application state
pub struct App {
    pub language: Language,
    pub messages: Messages,
    pub router: Router,
    pub suggest: SuggestState,
    pub results: ResultsState,
    pub auth: AuthSession,
    pub store: Box<dyn KeyValueStore>,
    pub input: TextArea<'static>,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    pub max_visible_suggestions: usize,
    /// Suggestions seen so far, for detail pages of terms not in the results
    pub known_suggestions: HashMap<String, Suggestion>,
    pub should_quit: bool,
    worker: Option<Worker>,
}

impl App {
    /// Language comes from the stored preference, then the config default
    pub fn new(
        config: &Config,
        mut store: Box<dyn KeyValueStore>,
        worker: Option<Worker>,
    ) -> Result<Self, GlossaError> {
        let language = stored_language(store.as_ref()).unwrap_or(config.locale.default);
        let messages = Messages::load(language)?;
        let auth = AuthSession::load(store.as_mut());

        let mut app = Self {
            language,
            input: TextArea::default(),
            messages,
            router: Router::new(Route::Home),
            suggest: SuggestState::from_config(&config.search),
            results: ResultsState::new(),
            auth,
            store,
            focus: Focus::Input,
            layout_regions: LayoutRegions::new(),
            max_visible_suggestions: config.search.max_visible_suggestions,
            known_suggestions: HashMap::new(),
            should_quit: false,
            worker,
        };
        app.style_input();
        Ok(app)
    }

    fn style_input(&mut self) {
        let border_color = match self.focus {
            Focus::Input => Color::Cyan,
            Focus::Page => Color::DarkGray,
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.messages.translate("home.search.inputLabel")))
                .border_style(Style::default().fg(border_color)),
        );
        self.input
            .set_placeholder_text(self.messages.translate("home.search.placeholder"));
        self.input.set_cursor_line_style(Style::default());
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Text currently in the search box
    pub fn query_text(&self) -> String {
        self.input.lines().first().cloned().unwrap_or_default()
    }

    /// Replace the search box text without touching the suggestion state
    pub fn set_input_text(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    /// Localized location of the current page
    pub fn location(&self) -> String {
        self.router.location(self.language)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::Input => {
                self.suggest.focus();
            }
            Focus::Page => self.suggest.dismiss(),
        }
        self.style_input();
    }

    /// Open a localized path the way the locale middleware would
    ///
    /// Paths without a supported prefix are redirected to the default
    /// language first.
    pub fn open_path(&mut self, path: &str) {
        let (lang, rest) = match resolve(path) {
            LocaleMatch::Prefixed { lang, rest } => (lang, rest),
            LocaleMatch::Redirect { to } => {
                log::debug!("Redirecting {} to {}", path, to);
                match resolve(&to) {
                    LocaleMatch::Prefixed { lang, rest } => (lang, rest),
                    LocaleMatch::Redirect { .. } => (Language::DEFAULT, "/".to_string()),
                }
            }
        };

        self.set_language(lang);
        self.navigate(Route::parse(&rest));
    }

    /// Push a route and load whatever the new page needs
    pub fn navigate(&mut self, route: Route) {
        self.router.push(route);
        self.on_route_changed();
    }

    /// Go back one page
    pub fn go_back(&mut self) -> bool {
        let moved = self.router.back();
        if moved {
            self.on_route_changed();
        }
        moved
    }

    pub(super) fn on_route_changed(&mut self) {
        log::debug!("Route changed to {}", self.location());
        match self.router.current().clone() {
            Route::SearchResults { query } => {
                let already_loaded = self.results.query() == query
                    && (self.results.is_loading() || !self.results.terms().is_empty());
                if !already_loaded {
                    self.start_search(&query);
                }
            }
            Route::Login => self.set_focus(Focus::Page),
            _ => {}
        }
    }

    fn start_search(&mut self, query: &str) {
        let request_id = self.results.begin_search(query);
        if query.trim().is_empty() {
            self.results.apply_search(request_id, Default::default());
            return;
        }
        self.dispatch(WorkerRequest::Search {
            request_id,
            query: query.to_string(),
        });
    }

    fn dispatch(&self, request: WorkerRequest) {
        match &self.worker {
            Some(worker) => {
                worker.dispatch(request);
            }
            None => log::debug!("No worker attached, dropping {:?}", request),
        }
    }

    /// Switch language without persisting it (route prefixes, startup)
    fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        match Messages::load(language) {
            Ok(messages) => {
                log::debug!("Language changed from {} to {}", self.language, language);
                self.language = language;
                self.messages = messages;
                self.style_input();
                true
            }
            Err(e) => {
                log::warn!("Keeping {} messages: {}", self.language, e);
                false
            }
        }
    }

    /// Language switcher: persist the choice and refresh open suggestions
    ///
    /// Choosing the active language is a no-op.
    pub fn change_language(&mut self, language: Language, now: Instant) {
        if !self.set_language(language) {
            return;
        }
        store_language(self.store.as_mut(), language);
        self.suggest.refresh(now);
    }

    /// Fire the debounce timer if it is due
    pub fn tick(&mut self, now: Instant) {
        if let Some(ticket) = self.suggest.tick(now) {
            self.dispatch(WorkerRequest::Lookup {
                request_id: ticket.request_id,
                query: ticket.query,
                language: self.language,
            });
        }
    }

    /// How long the event loop may sleep before the next timer is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.suggest.time_until_due(now)
    }

    /// Apply every response the worker has finished
    pub fn poll_worker(&mut self) {
        let mut responses = Vec::new();
        if let Some(worker) = &self.worker {
            while let Some(response) = worker.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    pub fn apply_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Lookup {
                request_id,
                outcome,
            } => {
                if let crate::service::LookupOutcome::Found(list) = &outcome {
                    for item in list {
                        self.known_suggestions.insert(item.id.clone(), item.clone());
                    }
                }
                self.suggest.apply_lookup(request_id, outcome);
            }
            WorkerResponse::Search {
                request_id,
                response,
            } => {
                self.results.apply_search(request_id, response);
            }
            WorkerResponse::SessionExpired => {
                self.dispatch(WorkerRequest::SetToken { token: None });
                self.auth.expire(self.store.as_mut());
                self.navigate(Route::Login);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

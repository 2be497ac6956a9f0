use super::{Navigator, Route};
use crate::locale::Language;

/// Current route plus a back stack
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Localized location of the current page
    pub fn location(&self, lang: Language) -> String {
        self.current.localized_path(lang)
    }

    /// Navigate forward; pushing the page already shown is ignored
    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        log::debug!("Navigating to {}", route.path());
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Swap the current page without growing the back stack
    pub fn replace(&mut self, route: Route) {
        self.current = route;
    }

    /// Go back one page; returns false when already at the first page
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Navigator for Router {
    fn go_to_search_results(&mut self, query: &str) {
        self.push(Route::SearchResults {
            query: query.to_string(),
        });
    }

    fn go_to_term_detail(&mut self, id: &str) {
        self.push(Route::TermDetail { id: id.to_string() });
    }
}

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::navigation::Route;

/// Keys of the results page; returns true when the key was consumed
pub fn handle_results_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.results.move_cursor_down();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.results.move_cursor_up();
            true
        }
        KeyCode::Home => {
            app.results.move_cursor_to(0);
            true
        }
        KeyCode::Enter => {
            let Some(id) = app.results.selected_term().map(|term| term.id.clone()) else {
                return false;
            };
            app.navigate(Route::TermDetail { id });
            true
        }
        KeyCode::Char('f') => app.results.toggle_favorite().is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::service::{SearchResponse, WorkerResponse};
    use crate::test_utils::test_helpers::{key, key_with_mods, term, test_app};

    fn app_with_results(ids: &[&str]) -> App {
        let mut app = test_app();
        app.navigate(Route::SearchResults {
            query: "server".to_string(),
        });
        app.set_focus(Focus::Page);
        let request_id = app.results.begin_search("server");
        app.apply_response(WorkerResponse::Search {
            request_id,
            response: SearchResponse {
                terms: ids.iter().map(|id| term(id, id, 1)).collect(),
                total: ids.len() as u64,
                page: 1,
                limit: 10,
            },
        });
        app
    }

    #[test]
    fn test_arrows_and_vim_keys_move_cursor() {
        let mut app = app_with_results(&["a", "b", "c"]);
        assert!(handle_results_key(&mut app, key(KeyCode::Down)));
        assert!(handle_results_key(&mut app, key(KeyCode::Char('j'))));
        assert_eq!(app.results.cursor(), 2);
        assert!(handle_results_key(&mut app, key(KeyCode::Char('k'))));
        assert_eq!(app.results.cursor(), 1);
        assert!(handle_results_key(&mut app, key(KeyCode::Home)));
        assert_eq!(app.results.cursor(), 0);
    }

    #[test]
    fn test_enter_opens_selected_term() {
        let mut app = app_with_results(&["a", "b"]);
        handle_results_key(&mut app, key(KeyCode::Down));
        assert!(handle_results_key(&mut app, key(KeyCode::Enter)));
        assert_eq!(
            app.router.current(),
            &Route::TermDetail {
                id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_enter_on_empty_page_falls_through() {
        let mut app = app_with_results(&[]);
        assert!(!handle_results_key(&mut app, key(KeyCode::Enter)));
    }

    #[test]
    fn test_f_toggles_favorite() {
        let mut app = app_with_results(&["a"]);
        assert!(handle_results_key(&mut app, key(KeyCode::Char('f'))));
        assert!(app.results.is_favorite("a"));
        handle_results_key(&mut app, key(KeyCode::Char('f')));
        assert!(!app.results.is_favorite("a"));
    }

    #[test]
    fn test_ctrl_keys_pass_through() {
        let mut app = app_with_results(&["a"]);
        assert!(!handle_results_key(
            &mut app,
            key_with_mods(KeyCode::Char('f'), KeyModifiers::CONTROL)
        ));
        assert!(!app.results.is_favorite("a"));
    }

    #[test]
    fn test_other_keys_are_not_consumed() {
        let mut app = app_with_results(&["a"]);
        assert!(!handle_results_key(&mut app, key(KeyCode::Char('q'))));
        assert!(!handle_results_key(&mut app, key(KeyCode::Esc)));
    }
}

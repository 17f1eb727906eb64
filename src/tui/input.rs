//! Key event routing
//!
//! Text editing keys go to the search input while `Editing`; in `Browsing`
//! keys are resolved through the configured bindings. The help overlay and
//! the warning modal close on any key.

use crate::app::{Actions, App, Mode};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Route a key event according to the current mode
pub fn handle_key_event(
    app: &mut App,
    action_handler: Actions,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    match &app.mode {
        Mode::Editing => handle_editing_mode(app, code, modifiers),
        Mode::Help => app.exit_mode(),
        Mode::Warning(_) => app.dismiss_warning(),
        Mode::Browsing => {
            if let Some(action) = app.config.keys.get_action(code, modifiers) {
                action_handler.handle_action(app, action);
            }
        }
    }
}

fn handle_editing_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('t') => app.toggle_search_mode(),
            KeyCode::Char('w') => app.input.delete_word(),
            KeyCode::Char('c') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc | KeyCode::Tab => app.exit_mode(),
        KeyCode::Char(c) => app.input.insert_char(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.cursor_left(),
        KeyCode::Right => app.input.cursor_right(),
        KeyCode::Home => app.input.cursor_home(),
        KeyCode::End => app.input.cursor_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Pane, Request};
    use crate::config::Config;
    use crate::github::{ApiError, RepoSummary, SearchApi, UserSummary};
    use crate::search::SearchMode;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct OneUserApi;

    impl SearchApi for OneUserApi {
        fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
            Ok(vec![UserSummary {
                login: term.to_string(),
                avatar_url: format!("https://avatars.example/{term}"),
                profile_url: format!("https://github.com/{term}"),
            }])
        }

        fn search_repos(&self, _term: &str) -> Result<Vec<RepoSummary>, ApiError> {
            Ok(Vec::new())
        }

        fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
            Ok(vec![RepoSummary {
                full_name: format!("{login}/dotfiles"),
            }])
        }
    }

    fn create_test_app() -> App {
        App::new(Config::default(), Box::new(OneUserApi))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, Actions::new(), code, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_edits_buffer() {
        let mut app = create_test_app();
        type_str(&mut app, "octx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "o");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        type_str(&mut app, "O");

        assert_eq!(app.input.buffer, "Octo");
        assert_eq!(app.mode, Mode::Editing);
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut app = create_test_app();
        type_str(&mut app, "rust lang");
        handle_key_event(
            &mut app,
            Actions::new(),
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        );
        assert_eq!(app.input.buffer, "rust ");
    }

    #[test]
    fn test_ctrl_t_toggles_while_editing() {
        let mut app = create_test_app();
        handle_key_event(
            &mut app,
            Actions::new(),
            KeyCode::Char('t'),
            KeyModifiers::CONTROL,
        );
        assert_eq!(app.search_mode(), SearchMode::Repo);
        assert!(app.input.buffer.is_empty());
    }

    #[test]
    fn test_enter_on_empty_input_warns_and_any_key_dismisses() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Warning("No value submitted".to_string()));
        assert!(app.pending.is_none());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Editing);
        assert!(app.input.buffer.is_empty());
    }

    #[test]
    fn test_search_then_browse_and_activate() {
        let mut app = create_test_app();
        type_str(&mut app, "octocat");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.pending, Some(Request::Search("octocat".to_string())));
        app.process_pending();
        assert_eq!(app.mode, Mode::Browsing);

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.pending,
            Some(Request::UserRepos("octocat".to_string()))
        );
        app.process_pending();
        assert_eq!(app.focus, Pane::Repos);
        assert_eq!(app.search.secondary().len(), 1);
    }

    #[test]
    fn test_browsing_keys_use_bindings() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browsing);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.search_mode(), SearchMode::Repo);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Pane::Repos);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Editing);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = create_test_app();
        app.mode = Mode::Browsing;
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, Mode::Browsing);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_from_browsing() {
        let mut app = create_test_app();
        app.mode = Mode::Browsing;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = create_test_app();
        app.mode = Mode::Browsing;
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.mode, Mode::Browsing);
        assert!(app.pending.is_none());
    }
}

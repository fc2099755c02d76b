//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::async_ops::AsyncCommand;
use super::state::{AppState, FetchState, Mode, View};
use crate::theme::Theme;

/// Handle a key event. Returns a command for the async worker when the
/// key triggers network work.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return None;
    }

    match state.mode {
        Mode::Search => handle_search_key(state, key),
        Mode::Filter => handle_filter_key(state, key),
        Mode::ThemePicker => handle_theme_picker_key(state, key),
        Mode::Help | Mode::About => {
            handle_popup_key(state, key);
            None
        }
        Mode::Normal => match state.view {
            View::Browse => handle_browse_key(state, key),
            View::Detail => handle_detail_key(state, key),
        },
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.mode = Mode::Normal,
        KeyCode::Backspace => state.pop_query_char(),
        KeyCode::Char(c) => state.push_query_char(c),
        _ => {}
    }
    None
}

fn handle_filter_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.mode = Mode::Normal,
        KeyCode::Char(' ') => state.toggle_filter_entry(),
        KeyCode::Char('r') => state.reset_filters(),
        KeyCode::Down | KeyCode::Char('j') => {
            let count = state.filter_entry_count();
            if count > 0 {
                state.filter_cursor = (state.filter_cursor + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.filter_cursor = state.filter_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => state.filter_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let count = state.filter_entry_count();
            if count > 0 {
                state.filter_cursor = count - 1;
            }
        }
        _ => {}
    }
    None
}

fn handle_theme_picker_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    let themes = Theme::all();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            // Discard the preview
            state.theme = state.config.theme;
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            state.config.theme = state.theme;
            state.mode = Mode::Normal;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.theme_picker_index + 1 < themes.len() {
                state.theme_picker_index += 1;
                state.theme = Theme(themes[state.theme_picker_index]);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if state.theme_picker_index > 0 {
                state.theme_picker_index -= 1;
                state.theme = Theme(themes[state.theme_picker_index]);
            }
        }
        _ => {}
    }
    None
}

fn handle_popup_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => {
            state.mode = Mode::Normal;
        }
        KeyCode::Char('g') if state.mode == Mode::About => {
            if let Err(e) = open::that(crate::REPO_URL) {
                state.set_status(format!("Failed to open browser: {e}"));
            }
        }
        _ => {}
    }
}

fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    let vim = state.config.vim_mode;

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.mode = Mode::Help,
        KeyCode::Char('A') => state.mode = Mode::About,
        KeyCode::Char('t') => {
            state.theme_picker_index = Theme::all()
                .iter()
                .position(|t| *t == state.theme.inner())
                .unwrap_or(0);
            state.mode = Mode::ThemePicker;
        }
        KeyCode::Char('/') => state.mode = Mode::Search,
        KeyCode::Char('f') => {
            state.filter_cursor = 0;
            state.mode = Mode::Filter;
        }
        KeyCode::Char('r') => {
            if state.fetch != FetchState::Pending {
                state.fetch = FetchState::Pending;
                // Refetched collection gets fresh artwork too
                state.clear_images();
                return Some(AsyncCommand::FetchAll);
            }
        }
        KeyCode::Char(']') => cycle_theme(state, true),
        KeyCode::Char('[') => cycle_theme(state, false),
        KeyCode::Down => state.select_next(),
        KeyCode::Up => state.select_prev(),
        KeyCode::Char('j') if vim => state.select_next(),
        KeyCode::Char('k') if vim => state.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => state.select_first(),
        KeyCode::Char('G') | KeyCode::End => state.select_last(),
        KeyCode::Enter | KeyCode::Right => {
            if let Some(country) = state.selected_country() {
                let name = country.name.common.clone();
                state.open_detail(&name);
                return Some(AsyncCommand::FetchCountry { name });
            }
        }
        KeyCode::Char('l') if vim => {
            if let Some(country) = state.selected_country() {
                let name = country.name.common.clone();
                state.open_detail(&name);
                return Some(AsyncCommand::FetchCountry { name });
            }
        }
        KeyCode::Char('o') => {
            let url = state
                .selected_country()
                .and_then(|c| c.map_url())
                .map(str::to_string);
            if let Some(url) = url {
                open_map(state, &url);
            }
        }
        KeyCode::Esc => {
            if state.criteria.name_query.is_empty() {
                state.clear_status();
            } else {
                state.clear_query();
            }
        }
        _ => {}
    }
    None
}

fn handle_detail_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    let vim = state.config.vim_mode;

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => state.close_detail(),
        KeyCode::Char('h') if vim => state.close_detail(),
        KeyCode::Down => state.detail.scroll = state.detail.scroll.saturating_add(1),
        KeyCode::Up => state.detail.scroll = state.detail.scroll.saturating_sub(1),
        KeyCode::Char('j') if vim => state.detail.scroll = state.detail.scroll.saturating_add(1),
        KeyCode::Char('k') if vim => state.detail.scroll = state.detail.scroll.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => state.detail.scroll = 0,
        KeyCode::Tab => {
            state.detail.artwork = state.detail.artwork.toggled();
        }
        KeyCode::Char('o') => {
            let url = state
                .detail
                .country
                .as_ref()
                .and_then(|c| c.map_url())
                .map(str::to_string);
            if let Some(url) = url {
                open_map(state, &url);
            }
        }
        KeyCode::Char('r') => {
            if matches!(state.detail.fetch, FetchState::Error(_)) {
                state.detail.fetch = FetchState::Pending;
                return Some(AsyncCommand::FetchCountry {
                    name: state.detail.name.clone(),
                });
            }
        }
        KeyCode::Char('?') => state.mode = Mode::Help,
        KeyCode::Char('t') => {
            state.theme_picker_index = Theme::all()
                .iter()
                .position(|t| *t == state.theme.inner())
                .unwrap_or(0);
            state.mode = Mode::ThemePicker;
        }
        KeyCode::Char(']') => cycle_theme(state, true),
        KeyCode::Char('[') => cycle_theme(state, false),
        _ => {}
    }
    None
}

/// Step through the theme rotation without opening the picker
fn cycle_theme(state: &mut AppState, forward: bool) {
    state.theme = if forward {
        state.theme.next()
    } else {
        state.theme.prev()
    };
    state.config.theme = state.theme;
    state.set_status(format!("Theme: {}", state.theme.name()));
}

fn open_map(state: &mut AppState, url: &str) {
    match open::that(url) {
        Ok(()) => state.set_status("Opened map in browser"),
        Err(e) => state.set_status(format!("Failed to open browser: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Artwork;
    use crate::config::Config;
    use crate::demo;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_demo() -> AppState {
        let mut state = AppState::new(Config::default());
        state.set_countries(demo::demo_countries());
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state_with_demo();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);

        let mut state = state_with_demo();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_search_mode_edits_query_live() {
        let mut state = state_with_demo();
        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.mode, Mode::Search);

        handle_key(&mut state, key(KeyCode::Char('p')));
        handle_key(&mut state, key(KeyCode::Char('e')));
        assert_eq!(state.criteria.name_query, "pe");
        assert_eq!(state.country_count(), 1); // Peru

        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode, Mode::Normal);
        // Leaving search mode keeps the query applied
        assert_eq!(state.country_count(), 1);
    }

    #[test]
    fn test_enter_opens_detail_and_requests_fetch() {
        let mut state = state_with_demo();
        let cmd = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.view, View::Detail);
        match cmd {
            Some(AsyncCommand::FetchCountry { name }) => {
                assert_eq!(name, state.detail.name);
            }
            other => panic!("expected FetchCountry, got {other:?}"),
        }

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.view, View::Browse);
    }

    #[test]
    fn test_filter_modal_toggle_and_reset() {
        let mut state = state_with_demo();
        handle_key(&mut state, key(KeyCode::Char('f')));
        assert_eq!(state.mode, Mode::Filter);

        // Move to "Asia" (index 2) and toggle it
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.criteria.continents, vec!["Asia".to_string()]);

        handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(state.criteria.is_empty());

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_esc_clears_query_before_status() {
        let mut state = state_with_demo();
        state.criteria.name_query = "ja".to_string();
        state.recompute();
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.criteria.name_query.is_empty());
        assert_eq!(state.country_count(), demo::demo_countries().len());
    }

    #[test]
    fn test_theme_picker_preview_and_cancel() {
        let mut state = state_with_demo();
        let original = state.theme;
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert_eq!(state.mode, Mode::ThemePicker);

        handle_key(&mut state, key(KeyCode::Char('j')));
        // Live preview applied
        assert_ne!(state.theme, original);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.theme, original);
        assert_eq!(state.config.theme, original);
    }

    #[test]
    fn test_theme_cycle_keys_wrap_both_ways() {
        let mut state = state_with_demo();
        let original = state.theme;

        handle_key(&mut state, key(KeyCode::Char(']')));
        assert_ne!(state.theme, original);
        // Cycling applies immediately and persists to config
        assert_eq!(state.config.theme, state.theme);

        handle_key(&mut state, key(KeyCode::Char('[')));
        assert_eq!(state.theme, original);
        assert_eq!(state.config.theme, original);
    }

    #[test]
    fn test_refresh_drops_downloaded_artwork() {
        let mut state = state_with_demo();
        state.insert_image("https://flagcdn.com/w320/pe.png", image::DynamicImage::new_rgb8(2, 2));
        assert!(state.has_image("https://flagcdn.com/w320/pe.png"));

        let cmd = handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(matches!(cmd, Some(AsyncCommand::FetchAll)));
        assert_eq!(state.fetch, FetchState::Pending);
        assert!(!state.has_image("https://flagcdn.com/w320/pe.png"));
    }

    #[test]
    fn test_detail_scroll_and_artwork_toggle() {
        let mut state = state_with_demo();
        state.open_detail("Peru");
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.detail.scroll, 2);
        handle_key(&mut state, key(KeyCode::Char('g')));
        assert_eq!(state.detail.scroll, 0);

        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.detail.artwork, Artwork::CoatOfArms);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.detail.artwork, Artwork::Flag);
    }
}

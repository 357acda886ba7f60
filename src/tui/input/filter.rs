use crossterm::event::{KeyCode, KeyEvent};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};

/// Catalog filter entry. The filter narrows live as it is typed.
pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.clear_filter();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Char(c) => {
            app.filter_input.push(c);
            app.apply_filter();
        }
        KeyCode::Backspace => {
            if let Some((offset, _)) = app.filter_input.grapheme_indices(true).next_back() {
                app.filter_input.truncate(offset);
            }
            app.apply_filter();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{Pane, test_app};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        crate::tui::input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_filter_narrows_live_and_applies() {
        let mut app = test_app();
        app.pane = Pane::Catalog;
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Filter);
        press(&mut app, KeyCode::Char('監'));
        let narrowed = app.visible_catalog().len();
        assert!(narrowed > 0 && narrowed < app.catalog.len());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.visible_catalog().len(), narrowed);
    }

    #[test]
    fn test_esc_clears_filter() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('発'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.filter.is_none());
        assert_eq!(app.visible_catalog().len(), app.catalog.len());
    }

    #[test]
    fn test_unmatchable_pattern_falls_back_to_literal() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('('));
        // "(" is not a valid regex; the escaped literal still matches the
        // full-width-parenthesis-free entries not at all, but must not panic
        assert!(app.filter.is_some());
    }
}

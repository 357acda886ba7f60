use crossterm::event::{KeyCode, KeyEvent};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::task::DURATION_CHOICES;
use crate::tui::app::{App, FormField, Mode};

/// Free-input form editing. Tab/Shift-Tab cycle fields; Enter creates the
/// card once both required fields are populated; Esc leaves the form as-is.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_field = next_field(app.form_field);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_field = prev_field(app.form_field);
            return;
        }
        KeyCode::Enter => {
            if app.form.is_valid() {
                app.create_from_form();
            }
            return;
        }
        _ => {}
    }

    match app.form_field {
        FormField::Name => edit_text(&mut app.form.name, key),
        FormField::Description => edit_text(&mut app.form.description, key),
        FormField::Duration => match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                app.form.duration_idx = Some(match app.form.duration_idx {
                    None => 0,
                    Some(i) => (i + 1) % DURATION_CHOICES.len(),
                });
            }
            KeyCode::Left => {
                app.form.duration_idx = Some(match app.form.duration_idx {
                    None | Some(0) => DURATION_CHOICES.len() - 1,
                    Some(i) => i - 1,
                });
            }
            _ => {}
        },
    }
}

fn next_field(field: FormField) -> FormField {
    match field {
        FormField::Name => FormField::Duration,
        FormField::Duration => FormField::Description,
        FormField::Description => FormField::Name,
    }
}

fn prev_field(field: FormField) -> FormField {
    match field {
        FormField::Name => FormField::Description,
        FormField::Duration => FormField::Name,
        FormField::Description => FormField::Duration,
    }
}

fn edit_text(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => pop_grapheme(buffer),
        _ => {}
    }
}

/// Remove the last grapheme cluster (a char pop would split combined kana
/// with voicing marks).
fn pop_grapheme(buffer: &mut String) {
    if let Some((offset, _)) = buffer.grapheme_indices(true).next_back() {
        buffer.truncate(offset);
    }
}

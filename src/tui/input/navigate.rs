use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::DURATION_CHOICES;
use crate::tui::app::{App, CreateTab, FormField, GrabState, Mode, Pane};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.pane = app.pane.next();
            return;
        }
        KeyCode::BackTab => {
            app.pane = app.pane.prev();
            return;
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.pane = app.pane.prev();
            return;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.pane = app.pane.next();
            return;
        }
        _ => {}
    }

    match app.pane {
        Pane::Catalog => handle_catalog_pane(app, key),
        Pane::Unscheduled => handle_unscheduled_pane(app, key),
        Pane::Grid => handle_grid_pane(app, key),
        Pane::Report => handle_report_pane(app, key),
    }
}

fn handle_catalog_pane(app: &mut App, key: KeyEvent) {
    // Tab toggle is shared between the two creation tabs
    if let KeyCode::Char('t') = key.code {
        app.tab = match app.tab {
            CreateTab::Catalog => CreateTab::Free,
            CreateTab::Free => CreateTab::Catalog,
        };
        return;
    }

    match app.tab {
        CreateTab::Catalog => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let count = app.visible_catalog().len();
                if count > 0 && app.catalog_cursor + 1 < count {
                    app.catalog_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.catalog_cursor = app.catalog_cursor.saturating_sub(1);
            }
            // [ / ] cycle the duration choice (arrows switch panes)
            KeyCode::Char(']') | KeyCode::Char(' ') => {
                app.catalog_duration_idx = Some(match app.catalog_duration_idx {
                    None => 0,
                    Some(i) => (i + 1) % DURATION_CHOICES.len(),
                });
            }
            KeyCode::Char('[') => {
                app.catalog_duration_idx = Some(match app.catalog_duration_idx {
                    None => DURATION_CHOICES.len() - 1,
                    Some(0) => DURATION_CHOICES.len() - 1,
                    Some(i) => i - 1,
                });
            }
            KeyCode::Char('/') => {
                app.mode = Mode::Filter;
            }
            KeyCode::Esc => {
                app.clear_filter();
            }
            KeyCode::Enter => {
                app.create_from_catalog();
            }
            _ => {}
        },
        CreateTab::Free => match key.code {
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('a') => {
                app.form_field = FormField::Name;
                app.mode = Mode::Form;
            }
            _ => {}
        },
    }
}

fn handle_unscheduled_pane(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.unscheduled_cursor + 1 < app.unscheduled.len() {
                app.unscheduled_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.unscheduled_cursor = app.unscheduled_cursor.saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Char('d') => {
            app.remove_unscheduled_at_cursor();
        }
        KeyCode::Enter | KeyCode::Char('g') => {
            if let Some(task) = app.unscheduled.get(app.unscheduled_cursor) {
                app.grab = Some(GrabState {
                    task_id: task.id.clone(),
                    slot_cursor: app.grid_cursor,
                });
                app.mode = Mode::Grab;
            }
        }
        _ => {}
    }
}

fn handle_grid_pane(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.grid_cursor + 1 < app.slots.len() {
                app.grid_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.grid_cursor = app.grid_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.grid_cursor = 0;
        }
        KeyCode::Char('G') => {
            app.grid_cursor = app.slots.len().saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Char('d') => {
            app.remove_placement_at_cursor();
        }
        _ => {}
    }
}

fn handle_report_pane(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('y') | KeyCode::Char('c') = key.code {
        app.copy_report();
    }
}

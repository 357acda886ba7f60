use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Grab mode: an unscheduled card is hovering over the grid. Moving the
/// cursor only changes transient highlight state; Enter is the single
/// accept-or-reject decision and Esc drops the gesture with no effect.
pub(super) fn handle_grab(app: &mut App, key: KeyEvent) {
    let Some(grab) = app.grab.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if grab.slot_cursor + 1 < app.slots.len() {
                grab.slot_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            grab.slot_cursor = grab.slot_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            grab.slot_cursor = 0;
        }
        KeyCode::Char('G') => {
            grab.slot_cursor = app.slots.len().saturating_sub(1);
        }
        KeyCode::Enter => {
            app.drop_grabbed();
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.grab = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use crate::tui::app::{GrabState, test_app};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        crate::tui::input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn grabbing_app() -> App {
        let mut app = test_app();
        app.unscheduled
            .push(Task::new("調剤".into(), 60, "調剤業務".into(), None));
        app.grab = Some(GrabState {
            task_id: app.unscheduled[0].id.clone(),
            slot_cursor: 0,
        });
        app.mode = Mode::Grab;
        app
    }

    #[test]
    fn test_cursor_movement_mutates_no_collections() {
        let mut app = grabbing_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.grab.as_ref().unwrap().slot_cursor, 1);
        assert_eq!(app.unscheduled.len(), 1);
        assert!(app.scheduled.is_empty());
    }

    #[test]
    fn test_esc_cancels_without_effect() {
        let mut app = grabbing_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.grab.is_none());
        assert_eq!(app.unscheduled.len(), 1);
        assert!(app.scheduled.is_empty());
    }

    #[test]
    fn test_enter_places_at_cursor_slot() {
        let mut app = grabbing_app();
        // 07:00 + 4 slots = 09:00
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.scheduled.len(), 1);
        assert_eq!(app.scheduled[0].start_time, "09:00");
        assert!(app.unscheduled.is_empty());
    }

    #[test]
    fn test_cursor_clamped_to_grid() {
        let mut app = grabbing_app();
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.grab.as_ref().unwrap().slot_cursor, app.slots.len() - 1);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.grab.as_ref().unwrap().slot_cursor, 0);
    }
}

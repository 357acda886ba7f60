use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::format_duration;
use crate::ops::schedule;
use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode::truncate_to_width;

use super::{pane_block, scroll_offset};

/// Middle column: the 07:00-23:00 half-hour grid with placements.
pub fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.pane == Pane::Grid || app.mode == Mode::Grab;
    let block = pane_block(app, focused, " 稼働時間 (7:00 - 23:00) ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let width = inner.width as usize;
    let height = inner.height as usize;

    // Hover interval while grabbing: [cursor slot, cursor slot + duration)
    let hover = app.grab.as_ref().and_then(|grab| {
        let task = app.grabbed_task()?;
        let start = schedule::parse_hhmm(app.slots.get(grab.slot_cursor)?).ok()?;
        let available = schedule::slot_available(
            &app.slots[grab.slot_cursor],
            task.duration,
            &app.scheduled,
        );
        Some((start, start + task.duration, available))
    });

    let cursor = match (&app.grab, app.pane) {
        (Some(grab), _) => Some(grab.slot_cursor),
        (None, Pane::Grid) => Some(app.grid_cursor),
        _ => None,
    };

    let scroll = scroll_offset(cursor.unwrap_or(0), app.slots.len(), height);
    let mut lines: Vec<Line> = Vec::new();

    for (i, slot) in app.slots.iter().enumerate().skip(scroll).take(height) {
        let slot_min = schedule::parse_hhmm(slot).unwrap_or(0);
        let is_cursor = cursor == Some(i);

        // Transient grab highlight, never a collection mutation
        let hover_bg = match hover {
            Some((h0, h1, ok)) if slot_min >= h0 && slot_min < h1 => {
                Some(if ok { app.theme.drop_ok_bg } else { app.theme.drop_bad_bg })
            }
            _ => None,
        };
        let row_bg = hover_bg.unwrap_or(if is_cursor { app.theme.selection_bg } else { bg });

        let time_style = Style::default()
            .fg(if is_cursor {
                app.theme.text_bright
            } else {
                app.theme.dim
            })
            .bg(row_bg);
        let marker = if is_cursor { "▸" } else { " " };

        let mut spans = vec![
            Span::styled(format!("{}{} ", marker, slot), time_style),
        ];

        if let Some(placed) = schedule::placement_at(&app.scheduled, slot) {
            let accent = app.theme.category_color(&placed.category);
            let label = format!(
                "{} - {}  {} ({})",
                placed.start_time,
                placed.end_time,
                placed.name,
                format_duration(placed.duration)
            );
            spans.push(Span::styled(
                truncate_to_width(&label, width.saturating_sub(8)),
                Style::default()
                    .fg(accent)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if schedule::slot_is_covered(&app.scheduled, slot) {
            spans.push(Span::styled(
                "│",
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        } else {
            let hint = if hover_bg.is_some() { "◇" } else { "·" };
            spans.push(Span::styled(
                hint,
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }

        // Pad the row so the hover/selection background spans the pane
        let used: usize = spans
            .iter()
            .map(|s| crate::util::unicode::display_width(&s.content))
            .sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

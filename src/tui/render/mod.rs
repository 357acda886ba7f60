pub mod grid_view;
pub mod help_overlay;
pub mod report_view;
pub mod status_row;
pub mod tasks_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::{App, Mode, Pane};

/// Main render function — header, three columns, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // content
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    // Content: task creation | time grid | summary + report
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(31),
            Constraint::Percentage(35),
        ])
        .split(chunks[1]);

    // Left column: creation panel on top, unscheduled cards below
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);

    tasks_view::render_create_panel(frame, app, left[0]);
    tasks_view::render_unscheduled(frame, app, left[1]);
    grid_view::render_grid(frame, app, columns[1]);
    report_view::render_report(frame, app, columns[2]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// App title plus a focus indicator per pane.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let focused = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let pane_label = |pane: Pane, label: &str| -> Span<'static> {
        let style = if app.pane == pane && app.mode != Mode::Grab {
            focused
        } else {
            dim
        };
        Span::styled(format!(" {} ", label), style)
    };

    let mut spans = vec![
        Span::styled(" 定形業務日報 ", title_style),
        Span::styled("│", dim),
        pane_label(Pane::Catalog, "1:作成"),
        pane_label(Pane::Unscheduled, "2:未配置"),
        pane_label(Pane::Grid, "3:スケジュール"),
        pane_label(Pane::Report, "4:日報"),
    ];
    if app.mode == Mode::Grab {
        spans.push(Span::styled(
            " [配置中] ",
            Style::default()
                .fg(app.theme.green)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), rows[0]);

    let separator = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, dim))),
        rows[1],
    );
}

/// Bordered block whose border brightens when the pane has focus.
pub(super) fn pane_block(app: &App, focused: bool, title: String) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(app.theme.highlight)
    } else {
        Style::default().fg(app.theme.dim)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .style(Style::default().bg(app.theme.background))
}

/// First visible row index keeping the cursor inside a window of `height` rows.
pub(super) fn scroll_offset(cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    cursor
        .saturating_sub(height.saturating_sub(1))
        .min(len - height)
}

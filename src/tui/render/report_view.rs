use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::ops::report;
use crate::tui::app::{App, Pane};

use super::pane_block;

/// Right column: today's summary numbers and the report preview.
pub fn render_report(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    render_summary(frame, app, rows[0]);
    render_preview(frame, app, rows[1]);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let block = pane_block(app, false, " 今日の概要 ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let (placed, total, unplaced) = report::summary_counts(&app.scheduled, app.unscheduled.len());
    let lines = vec![
        Line::from(vec![
            Span::styled("配置済みタスク数: ", label),
            Span::styled(format!("{}件", placed), value),
        ]),
        Line::from(vec![
            Span::styled("合計稼働時間:     ", label),
            Span::styled(total, value),
        ]),
        Line::from(vec![
            Span::styled("未配置タスク数:   ", label),
            Span::styled(format!("{}件", unplaced), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.pane == Pane::Report;
    let block = pane_block(app, focused, " 日報プレビュー ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;

    if app.scheduled.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "タスクを配置すると日報が表示されます",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .wrap(Wrap { trim: false });
        frame.render_widget(placeholder, inner);
        return;
    }

    // Derived fresh on every draw
    let text = app.report_text();
    let mut lines: Vec<Line> = text
        .lines()
        .map(|l| {
            let style = if l.starts_with('【') {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::from(Span::styled(l.to_string(), style))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y: クリップボードにコピー",
        Style::default().fg(app.theme.cyan).bg(bg),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .wrap(Wrap { trim: false }),
        inner,
    );
}

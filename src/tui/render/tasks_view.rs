use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{DURATION_CHOICES, format_duration};
use crate::tui::app::{App, CreateTab, FormField, Mode, Pane};
use crate::util::unicode::truncate_to_width;

use super::{pane_block, scroll_offset};

/// Top of the left column: the creation tabs (catalog picker / free form).
pub fn render_create_panel(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.pane == Pane::Catalog;
    let block = pane_block(app, focused, tab_title(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.tab {
        CreateTab::Catalog => render_catalog_tab(frame, app, inner),
        CreateTab::Free => render_free_tab(frame, app, inner),
    }
}

fn tab_title(app: &App) -> String {
    match app.tab {
        CreateTab::Catalog => " [定形業務] 自由入力 ".to_string(),
        CreateTab::Free => " 定形業務 [自由入力] ".to_string(),
    }
}

/// One display row of the catalog tab: a category header or an entry with its
/// index into the visible list.
enum CatalogRow<'a> {
    Header(&'a str),
    Entry(usize, &'a crate::model::catalog::CatalogEntry),
}

fn render_catalog_tab(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let entries = app.visible_catalog();
    let mut lines: Vec<Line> = Vec::new();

    // Flatten entries and their category headers into display rows first, so
    // the scroll window is computed over what actually renders
    let mut rows: Vec<CatalogRow> = Vec::new();
    let mut last_category: Option<&str> = None;
    for (i, entry) in entries.iter().enumerate() {
        if last_category != Some(entry.category.as_str()) {
            rows.push(CatalogRow::Header(&entry.category));
            last_category = Some(entry.category.as_str());
        }
        rows.push(CatalogRow::Entry(i, *entry));
    }

    let list_height = (area.height as usize).saturating_sub(2);
    let cursor_row = rows
        .iter()
        .position(|r| matches!(r, CatalogRow::Entry(i, _) if *i == app.catalog_cursor))
        .unwrap_or(0);
    let scroll = scroll_offset(cursor_row, rows.len(), list_height);

    for row in rows.iter().skip(scroll).take(list_height) {
        match row {
            CatalogRow::Header(category) => {
                lines.push(Line::from(Span::styled(
                    format!("◆ {}", category),
                    Style::default()
                        .fg(app.theme.category_color(category))
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            CatalogRow::Entry(i, entry) => {
                let selected = *i == app.catalog_cursor;
                let style = if selected {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(app.theme.selection_bg)
                } else {
                    Style::default().fg(app.theme.text).bg(bg)
                };
                let marker = if selected { "▸ " } else { "  " };
                lines.push(Line::from(Span::styled(
                    format!("{}{}", marker, truncate_to_width(&entry.name, width.saturating_sub(2))),
                    style,
                )));
            }
        }
    }
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "該当するタスクがありません",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    // Bottom: filter (when set) and the duration selector
    while lines.len() < (area.height as usize).saturating_sub(2) {
        lines.push(Line::from(""));
    }
    if app.mode == Mode::Filter || !app.filter_input.is_empty() {
        let cursor = if app.mode == Mode::Filter { "\u{258C}" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("/{}{}", app.filter_input, cursor),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(duration_selector_line(app, app.catalog_duration_idx));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_free_tab(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Form;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);

    let field_line = |field: FormField, label: &str, value: String| -> Line<'static> {
        let active = editing && app.form_field == field;
        let marker = if active { "▸ " } else { "  " };
        let style = if active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            value_style
        };
        let cursor = if active && field != FormField::Duration {
            "\u{258C}"
        } else {
            ""
        };
        Line::from(vec![
            Span::styled(format!("{}{}: ", marker, label), label_style),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let mut lines = vec![
        field_line(FormField::Name, "タスク名", app.form.name.clone()),
        Line::from(""),
        duration_field_line(app, editing),
        Line::from(""),
        field_line(FormField::Description, "詳細(任意)", app.form.description.clone()),
        Line::from(""),
    ];

    let hint = if app.form.is_valid() {
        Span::styled(
            "Enter: タスクカードを作成",
            Style::default().fg(app.theme.green).bg(bg),
        )
    } else {
        Span::styled(
            "タスク名と所要時間が必要です",
            Style::default().fg(app.theme.dim).bg(bg),
        )
    };
    lines.push(Line::from(hint));
    if !editing {
        lines.push(Line::from(Span::styled(
            "i で入力開始",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn duration_field_line(app: &App, editing: bool) -> Line<'static> {
    let active = editing && app.form_field == FormField::Duration;
    let marker = if active { "▸ " } else { "  " };
    let label_style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let value = match app.form.duration_idx {
        Some(i) => format_duration(DURATION_CHOICES[i]),
        None => "未選択 (←/→で選択)".to_string(),
    };
    let style = if active {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    };
    Line::from(vec![
        Span::styled(format!("{}所要時間: ", marker), label_style),
        Span::styled(value, style),
    ])
}

fn duration_selector_line(app: &App, duration_idx: Option<usize>) -> Line<'static> {
    let bg = app.theme.background;
    let label = match duration_idx {
        Some(i) => format_duration(DURATION_CHOICES[i]),
        None => "未選択".to_string(),
    };
    let style = if duration_idx.is_some() {
        Style::default().fg(app.theme.cyan).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    Line::from(vec![
        Span::styled("所要時間: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(label, style),
        Span::styled("  [/]で変更", Style::default().fg(app.theme.dim).bg(bg)),
    ])
}

/// Bottom of the left column: unscheduled task cards.
pub fn render_unscheduled(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.pane == Pane::Unscheduled;
    let title = format!(" 未配置タスク ({}) ", app.unscheduled.len());
    let block = pane_block(app, focused, title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if app.unscheduled.is_empty() {
        lines.push(Line::from(Span::styled(
            "タスクカードがありません",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let height = inner.height as usize;
    let scroll = scroll_offset(app.unscheduled_cursor, app.unscheduled.len(), height);
    for (i, task) in app.unscheduled.iter().enumerate().skip(scroll).take(height) {
        let selected = focused && i == app.unscheduled_cursor;
        let grabbed = app
            .grab
            .as_ref()
            .is_some_and(|g| g.task_id == task.id);
        let base = if grabbed {
            Style::default().fg(app.theme.green).bg(bg)
        } else if selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let marker = if grabbed {
            "✈ "
        } else if selected {
            "▸ "
        } else {
            "  "
        };
        let label = format!("{} {}", task.name, format_duration(task.duration));
        let mut spans = vec![
            Span::styled(marker.to_string(), base),
            Span::styled(
                "● ",
                Style::default()
                    .fg(app.theme.category_color(&task.category))
                    .bg(if selected { app.theme.selection_bg } else { bg }),
            ),
            Span::styled(truncate_to_width(&label, width.saturating_sub(4)), base),
        ];
        if task.description.is_some() {
            spans.push(Span::styled(" +", Style::default().fg(app.theme.dim).bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

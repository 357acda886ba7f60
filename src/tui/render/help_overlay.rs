use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(56, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" キー操作", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" 全体", header_style)));
    add_binding(&mut lines, " Tab/h/l", "ペイン切替", key_style, desc_style);
    add_binding(&mut lines, " q", "終了", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" タスク作成", header_style)));
    add_binding(&mut lines, " t", "定形業務/自由入力タブ切替", key_style, desc_style);
    add_binding(&mut lines, " j/k", "カーソル移動", key_style, desc_style);
    add_binding(&mut lines, " [ ]", "所要時間の変更", key_style, desc_style);
    add_binding(&mut lines, " /", "カタログ絞り込み", key_style, desc_style);
    add_binding(&mut lines, " Enter", "タスクカードを作成", key_style, desc_style);
    add_binding(&mut lines, " i", "自由入力フォームを編集", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" 未配置タスク", header_style)));
    add_binding(&mut lines, " Enter/g", "カードを持ち上げて配置", key_style, desc_style);
    add_binding(&mut lines, " x/d", "カードを削除", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" 配置中", header_style)));
    add_binding(&mut lines, " j/k", "スロット移動", key_style, desc_style);
    add_binding(&mut lines, " Enter", "その時間に配置", key_style, desc_style);
    add_binding(&mut lines, " Esc", "キャンセル (変更なし)", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" スケジュール / 日報", header_style)));
    add_binding(&mut lines, " x/d", "配置を解除", key_style, desc_style);
    add_binding(&mut lines, " y", "日報をクリップボードへ", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .title(" ヘルプ ")
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// A centered rect taking the given percentages of the outer area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

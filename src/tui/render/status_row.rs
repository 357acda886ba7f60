use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, CreateTab, Mode, Pane};

/// Render the status row (bottom of screen): transient messages first,
/// otherwise mode/pane-specific key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(message) = &app.status {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    } else {
        let hint = hint_for(app);
        Line::from(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hint_for(app: &App) -> String {
    match app.mode {
        Mode::Grab => "j/k 移動  Enter 配置  Esc キャンセル".to_string(),
        Mode::Form => "Tab 次の項目  Enter 作成  Esc 閉じる".to_string(),
        Mode::Filter => "絞り込み入力  Enter 確定  Esc クリア".to_string(),
        Mode::Navigate => match app.pane {
            Pane::Catalog => match app.tab {
                CreateTab::Catalog => {
                    "j/k 選択  [/] 時間  Enter カード作成  / 絞り込み  t タブ切替  ? ヘルプ".to_string()
                }
                CreateTab::Free => "i 入力開始  t タブ切替  ? ヘルプ".to_string(),
            },
            Pane::Unscheduled => "j/k 選択  Enter 配置へ  x 削除  ? ヘルプ".to_string(),
            Pane::Grid => "j/k 移動  x 配置解除  ? ヘルプ".to_string(),
            Pane::Report => "y コピー  ? ヘルプ".to_string(),
        },
    }
}

use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::task::ScheduledTask;

/// Total scheduled minutes across all placements.
pub fn total_minutes(scheduled: &[ScheduledTask]) -> u32 {
    scheduled.iter().map(|t| t.duration as u32).sum()
}

/// Total formatted as `{H}時間{M}分`, minutes clause omitted when zero.
pub fn format_total(minutes: u32) -> String {
    let hours = minutes / 60;
    let rem = minutes % 60;
    if rem > 0 {
        format!("{}時間{}分", hours, rem)
    } else {
        format!("{}時間", hours)
    }
}

/// Japanese long-form date: `2025年6月2日(月曜日)`.
pub fn format_date_ja(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    };
    format!(
        "{}年{}月{}日({}曜日)",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Render the daily report text for the given date. Pure derivation over a
/// sorted copy of the placements; safe to recompute on every render.
pub fn generate_report(scheduled: &[ScheduledTask], date: NaiveDate) -> String {
    let mut report = format!("【日報】 {}\n\n", format_date_ja(date));
    report.push_str(&format!(
        "【合計稼働時間】 {}\n\n",
        format_total(total_minutes(scheduled))
    ));

    if !scheduled.is_empty() {
        report.push_str("【実施業務】\n");
        let mut sorted: Vec<&ScheduledTask> = scheduled.iter().collect();
        // Lexicographic sort is chronological for zero-padded "HH:MM"
        sorted.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        for task in sorted {
            report.push_str(&format!(
                "{} - {} : {}",
                task.start_time, task.end_time, task.name
            ));
            if let Some(desc) = &task.description {
                report.push_str(&format!(" ({})", desc));
            }
            report.push('\n');
        }
    }

    report
}

/// One-line summary for the overview pane: placed count, total, unplaced count.
pub fn summary_counts(scheduled: &[ScheduledTask], unscheduled: usize) -> (usize, String, usize) {
    (
        scheduled.len(),
        format_total(total_minutes(scheduled)),
        unscheduled,
    )
}

//! Integration tests for the `nippo` CLI.
//!
//! Each test runs the built binary as a subprocess and verifies stdout,
//! stderr and exit codes.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `nippo` binary.
fn nippo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("nippo");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    // Run from a temp dir so a developer's own nippo.toml can't leak in
    let dir = tempfile::tempdir().unwrap();
    Command::new(nippo_bin())
        .args(args)
        .current_dir(dir.path())
        .env_remove("HOME")
        .output()
        .unwrap()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ---------------------------------------------------------------------------
// catalog / slots / durations
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_grouped_entries() {
    let output = run(&["catalog"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("調剤業務"));
    assert!(text.contains("  処方入力"));
    assert!(text.contains("業務管理"));
    assert!(text.contains("  発注"));
}

#[test]
fn catalog_json_has_four_categories() {
    let output = run(&["catalog", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["category"], "調剤業務");
    assert_eq!(categories[0]["entries"].as_array().unwrap().len(), 7);
}

#[test]
fn slots_run_half_hourly_to_closing() {
    let output = run(&["slots"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let slots: Vec<&str> = text.lines().collect();
    assert_eq!(slots.first(), Some(&"07:00"));
    assert_eq!(slots.last(), Some(&"23:00"));
    assert_eq!(slots.len(), 33);
    assert!(!slots.contains(&"23:30"));
}

#[test]
fn durations_list_labels() {
    let output = run(&["durations"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("15分"));
    assert!(text.contains("1時間30分"));
    assert!(text.contains("4時間"));
}

// ---------------------------------------------------------------------------
// report
// ---------------------------------------------------------------------------

#[test]
fn report_composes_sorted_text() {
    let output = run(&[
        "report",
        "--date",
        "2025-06-02",
        "14:00,60,薬歴",
        "09:00,90,処方入力",
        "11:00,30,監査,外来分",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("【日報】 2025年6月2日(月曜日)\n"));
    assert!(text.contains("【合計稼働時間】 3時間\n"));
    let jobs: Vec<&str> = text.lines().skip_while(|l| *l != "【実施業務】").collect();
    assert_eq!(
        jobs,
        vec![
            "【実施業務】",
            "09:00 - 10:30 : 処方入力",
            "11:00 - 11:30 : 監査 (外来分)",
            "14:00 - 15:00 : 薬歴",
        ]
    );
}

#[test]
fn report_json_includes_totals_and_categories() {
    let output = run(&[
        "report",
        "--json",
        "--date",
        "2025-06-02",
        "09:00,60,調剤",
        "10:00,45,買い出し",
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total_minutes"], 105);
    assert_eq!(json["total"], "1時間45分");
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    // Catalog names inherit their category, free names fall back
    assert_eq!(tasks[0]["category"], "調剤業務");
    assert_eq!(tasks[1]["category"], "その他");
    assert_eq!(tasks[0]["end_time"], "10:00");
}

#[test]
fn report_keeps_unpadded_entries_chronological() {
    let output = run(&[
        "report",
        "--date",
        "2025-06-02",
        "14:00,60,薬歴",
        "7:00,60,開局準備",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    // The unpadded start is stored zero-padded, so it sorts before 14:00
    assert!(text.contains("07:00 - 08:00 : 開局準備"));
    let jobs: Vec<&str> = text.lines().skip_while(|l| *l != "【実施業務】").collect();
    assert_eq!(
        jobs,
        vec![
            "【実施業務】",
            "07:00 - 08:00 : 開局準備",
            "14:00 - 15:00 : 薬歴",
        ]
    );
}

#[test]
fn report_rejects_overlap() {
    let output = run(&[
        "report",
        "--date",
        "2025-06-02",
        "09:00,60,調剤",
        "09:30,30,監査",
    ]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("調剤"));
}

#[test]
fn report_rejects_past_closing() {
    let output = run(&["report", "22:30,60,レジ締め　毎日"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("23:00"));
}

#[test]
fn report_rejects_malformed_entry() {
    let output = run(&["report", "nine,60,調剤"]);
    assert!(!output.status.success());

    let output = run(&["report", "09:00,25,調剤"]);
    assert!(!output.status.success());
}

#[test]
fn report_accepts_day_flush_to_closing() {
    let output = run(&["report", "--date", "2025-06-02", "22:00,60,レジ締め　毎日"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("22:00 - 23:00 : レジ締め　毎日"));
}

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::cli::commands::{Cli, Commands, ReportArgs};
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::catalog::{build_catalog, group_by_category};
use crate::model::task::{DURATION_CHOICES, FALLBACK_CATEGORY, ScheduledTask, Task, format_duration};
use crate::ops::{report, schedule};
use crate::util::clipboard;

/// Error type for report entry parsing
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("malformed entry '{0}': expected \"HH:MM,minutes,name[,description]\"")]
    Malformed(String),
    #[error("bad duration '{0}': not a number of minutes")]
    BadDuration(String),
    #[error("duration {0} is not one of the selectable choices (15/30/45/60/90/120/150/180/240)")]
    UnknownDuration(u16),
    #[error("bad date '{0}': expected YYYY-MM-DD")]
    BadDate(String),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => unreachable!("main launches the TUI when no subcommand is given"),
        Some(Commands::Catalog) => cmd_catalog(json),
        Some(Commands::Slots) => cmd_slots(json),
        Some(Commands::Durations) => cmd_durations(json),
        Some(Commands::Report(args)) => cmd_report(args, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_catalog(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let entries = build_catalog(&config);
    let groups = group_by_category(&entries);

    if json {
        let out = CatalogJson {
            categories: groups
                .iter()
                .map(|(category, entries)| CatalogCategoryJson {
                    category: category.clone(),
                    entries: entries
                        .iter()
                        .map(|e| CatalogEntryJson {
                            key: e.key.clone(),
                            name: e.name.clone(),
                            category: e.category.clone(),
                        })
                        .collect(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (category, entries) in &groups {
        println!("{}", category);
        for entry in entries {
            println!("  {}", entry.name);
        }
    }
    Ok(())
}

fn cmd_slots(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let slots = schedule::time_slots();
    if json {
        println!("{}", serde_json::to_string_pretty(&SlotsJson { slots })?);
        return Ok(());
    }
    for slot in slots {
        println!("{}", slot);
    }
    Ok(())
}

fn cmd_durations(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out: Vec<DurationJson> = DURATION_CHOICES
            .iter()
            .map(|&minutes| DurationJson {
                minutes,
                label: format_duration(minutes),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for &minutes in DURATION_CHOICES {
        println!("{:>3}  {}", minutes, format_duration(minutes));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Report composition
// ---------------------------------------------------------------------------

/// One parsed report entry before placement.
struct PlanEntry {
    start: String,
    task: Task,
}

/// Parse "HH:MM,minutes,name[,description]". The name inherits a catalog
/// category when it matches a catalog entry, otherwise the fallback.
fn parse_entry(raw: &str, catalog_category: impl Fn(&str) -> Option<String>) -> Result<PlanEntry, EntryError> {
    let mut parts = raw.splitn(4, ',');
    let (Some(start), Some(minutes), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(EntryError::Malformed(raw.to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(EntryError::Malformed(raw.to_string()));
    }
    let duration: u16 = minutes
        .trim()
        .parse()
        .map_err(|_| EntryError::BadDuration(minutes.to_string()))?;
    if !DURATION_CHOICES.contains(&duration) {
        return Err(EntryError::UnknownDuration(duration));
    }
    let description = parts.next().map(|d| d.trim().to_string());
    let category =
        catalog_category(name).unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
    Ok(PlanEntry {
        start: start.trim().to_string(),
        task: Task::new(name.to_string(), duration, category, description),
    })
}

fn cmd_report(args: ReportArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let catalog = build_catalog(&config);
    let lookup = |name: &str| {
        catalog
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.category.clone())
    };

    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| EntryError::BadDate(raw.clone()))?,
        None => Local::now().date_naive(),
    };

    // Run every entry through the placement engine in order; any rejection
    // aborts the whole composition.
    let mut scheduled: Vec<ScheduledTask> = Vec::new();
    for raw in &args.entries {
        let entry = parse_entry(raw, lookup)?;
        let placed = schedule::try_place(&entry.task, &entry.start, &scheduled)?;
        scheduled.push(placed);
    }
    info!(entries = scheduled.len(), "composed report");

    let text = report::generate_report(&scheduled, date);

    if json {
        let out = ReportJson {
            date: report::format_date_ja(date),
            total_minutes: report::total_minutes(&scheduled),
            total: report::format_total(report::total_minutes(&scheduled)),
            tasks: scheduled.iter().map(ScheduledTaskJson::from).collect(),
            text: text.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", text);
    }

    if args.copy && !clipboard::copy_to_clipboard(&text) {
        eprintln!("warning: could not copy to clipboard");
    }
    Ok(())
}

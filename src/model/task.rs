use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The fixed set of selectable durations, in minutes.
pub const DURATION_CHOICES: &[u16] = &[15, 30, 45, 60, 90, 120, 150, 180, 240];

/// Fallback category for free-form tasks.
pub const FALLBACK_CATEGORY: &str = "その他";

/// A work task card, not yet bound to a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id: `task-{millis}-{random suffix}`
    pub id: String,
    pub name: String,
    /// Duration in minutes, one of [`DURATION_CHOICES`]
    pub duration: u16,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    /// Build a task from a free-form entry. Empty descriptions collapse to None.
    pub fn new(name: String, duration: u16, category: String, description: Option<String>) -> Self {
        Task {
            id: fresh_task_id(),
            name,
            duration,
            category,
            description: description.filter(|d| !d.is_empty()),
        }
    }

    /// Build a task from a catalog selection (inherits the entry's category).
    pub fn from_catalog(entry: &crate::model::catalog::CatalogEntry, duration: u16) -> Self {
        Task::new(entry.name.to_string(), duration, entry.category.to_string(), None)
    }
}

/// A task bound to a start/end time on the grid.
///
/// Invariant: `end_time = start_time + duration` (clamped to "23:59" past
/// midnight), and no two scheduled tasks' `[start, end)` intervals overlap.
/// Only the placement engine constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Placement id: `{task id}-{uniqueness token}`
    pub id: String,
    pub name: String,
    pub duration: u16,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Zero-padded "HH:MM"
    pub start_time: String,
    /// Zero-padded "HH:MM"
    pub end_time: String,
}

/// Mint a unique task id from a millisecond timestamp and a random suffix.
pub fn fresh_task_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("task-{}-{}", millis, &suffix[..9])
}

/// Format a duration the way the cards show it: `45分`, `1時間`, `1時間30分`.
pub fn format_duration(minutes: u16) -> String {
    if minutes < 60 {
        return format!("{}分", minutes);
    }
    let hours = minutes / 60;
    let rem = minutes % 60;
    if rem > 0 {
        format!("{}時間{}分", hours, rem)
    } else {
        format!("{}時間", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(15), "15分");
        assert_eq!(format_duration(45), "45分");
        assert_eq!(format_duration(60), "1時間");
        assert_eq!(format_duration(90), "1時間30分");
        assert_eq!(format_duration(240), "4時間");
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = fresh_task_id();
        let b = fresh_task_id();
        assert_ne!(a, b);
        assert!(a.starts_with("task-"));
    }

    #[test]
    fn test_empty_description_collapses() {
        let t = Task::new("電話対応".into(), 30, FALLBACK_CATEGORY.into(), Some(String::new()));
        assert_eq!(t.description, None);
    }
}

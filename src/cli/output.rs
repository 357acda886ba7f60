use serde::Serialize;

use crate::model::task::ScheduledTask;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CatalogEntryJson {
    pub key: String,
    pub name: String,
    pub category: String,
}

#[derive(Serialize)]
pub struct CatalogJson {
    pub categories: Vec<CatalogCategoryJson>,
}

#[derive(Serialize)]
pub struct CatalogCategoryJson {
    pub category: String,
    pub entries: Vec<CatalogEntryJson>,
}

#[derive(Serialize)]
pub struct SlotsJson {
    pub slots: Vec<String>,
}

#[derive(Serialize)]
pub struct DurationJson {
    pub minutes: u16,
    pub label: String,
}

#[derive(Serialize)]
pub struct ReportJson {
    pub date: String,
    pub total_minutes: u32,
    pub total: String,
    pub tasks: Vec<ScheduledTaskJson>,
    pub text: String,
}

#[derive(Serialize)]
pub struct ScheduledTaskJson {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: u16,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&ScheduledTask> for ScheduledTaskJson {
    fn from(task: &ScheduledTask) -> Self {
        ScheduledTaskJson {
            id: task.id.clone(),
            name: task.name.clone(),
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
            duration: task.duration,
            category: task.category.clone(),
            description: task.description.clone(),
        }
    }
}

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::{debug, info};

use crate::io::config_io;
use crate::model::catalog::{CatalogEntry, build_catalog};
use crate::model::task::{DURATION_CHOICES, ScheduledTask, Task};
use crate::ops::{report, schedule};
use crate::tui::theme::Theme;
use crate::util::clipboard;

use super::input;
use super::render;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Catalog,
    Unscheduled,
    Grid,
    Report,
}

impl Pane {
    pub fn next(self) -> Pane {
        match self {
            Pane::Catalog => Pane::Unscheduled,
            Pane::Unscheduled => Pane::Grid,
            Pane::Grid => Pane::Report,
            Pane::Report => Pane::Catalog,
        }
    }

    pub fn prev(self) -> Pane {
        match self {
            Pane::Catalog => Pane::Report,
            Pane::Unscheduled => Pane::Catalog,
            Pane::Grid => Pane::Unscheduled,
            Pane::Report => Pane::Grid,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Editing the free-input form
    Form,
    /// Carrying an unscheduled card over the grid
    Grab,
    /// Typing a catalog filter
    Filter,
}

/// Which creation tab is active in the catalog pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTab {
    Catalog,
    Free,
}

/// Fields of the free-input form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Duration,
    Description,
}

/// State of the free-input form. A card can only be created once both
/// required fields (name, duration) are populated.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub duration_idx: Option<usize>,
    pub description: String,
}

impl FormState {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.duration_idx.is_some()
    }

    /// Build the task and reset the form. None while invalid.
    pub fn take_task(&mut self) -> Option<Task> {
        if !self.is_valid() {
            return None;
        }
        let duration = DURATION_CHOICES[self.duration_idx?];
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        let task = Task::new(
            self.name.trim().to_string(),
            duration,
            crate::model::task::FALLBACK_CATEGORY.to_string(),
            description,
        );
        *self = FormState::default();
        Some(task)
    }
}

/// The typed payload carried through a grab gesture: just the card's id and a
/// hover position. Nothing is mutated until the drop is confirmed.
#[derive(Debug, Clone)]
pub struct GrabState {
    pub task_id: String,
    /// Index into the slot grid the card is hovering over
    pub slot_cursor: usize,
}

/// Main application state. The two task collections are owned here and only
/// mutated inside key handlers; everything else is derived per render.
pub struct App {
    pub unscheduled: Vec<Task>,
    pub scheduled: Vec<ScheduledTask>,
    pub catalog: Vec<CatalogEntry>,
    /// Grid slot labels, fixed for the app's lifetime
    pub slots: Vec<String>,
    pub theme: Theme,

    pub pane: Pane,
    pub mode: Mode,
    pub tab: CreateTab,
    pub should_quit: bool,
    pub show_help: bool,

    /// Cursor into the filtered catalog entry list
    pub catalog_cursor: usize,
    /// Duration picked for the next catalog card
    pub catalog_duration_idx: Option<usize>,
    pub filter_input: String,
    pub filter: Option<Regex>,
    /// Form field with focus while in Form mode
    pub form_field: FormField,
    pub form: FormState,

    pub unscheduled_cursor: usize,
    pub grid_cursor: usize,
    pub grab: Option<GrabState>,

    /// Transient status message, cleared on the next keypress
    pub status: Option<String>,
}

impl App {
    pub fn new(catalog: Vec<CatalogEntry>, theme: Theme) -> Self {
        App {
            unscheduled: Vec::new(),
            scheduled: Vec::new(),
            catalog,
            slots: schedule::time_slots(),
            theme,
            pane: Pane::Catalog,
            mode: Mode::Navigate,
            tab: CreateTab::Catalog,
            should_quit: false,
            show_help: false,
            catalog_cursor: 0,
            catalog_duration_idx: None,
            filter_input: String::new(),
            filter: None,
            form_field: FormField::Name,
            form: FormState::default(),
            unscheduled_cursor: 0,
            grid_cursor: 0,
            grab: None,
            status: None,
        }
    }

    /// Catalog entries that pass the current filter, in catalog order.
    pub fn visible_catalog(&self) -> Vec<&CatalogEntry> {
        match &self.filter {
            None => self.catalog.iter().collect(),
            Some(re) => self
                .catalog
                .iter()
                .filter(|e| re.is_match(&e.name) || re.is_match(&e.category))
                .collect(),
        }
    }

    /// The catalog entry under the cursor, if any.
    pub fn selected_catalog_entry(&self) -> Option<&CatalogEntry> {
        self.visible_catalog().get(self.catalog_cursor).copied()
    }

    /// Create a card from the catalog selection. Requires both a selected
    /// entry and a duration, like the browser form's disabled button.
    pub fn create_from_catalog(&mut self) {
        let Some(duration_idx) = self.catalog_duration_idx else {
            self.set_status("所要時間を選択してください");
            return;
        };
        let Some(entry) = self.selected_catalog_entry() else {
            return;
        };
        let task = Task::from_catalog(entry, DURATION_CHOICES[duration_idx]);
        info!(name = %task.name, duration = task.duration, "created catalog card");
        self.set_status(format!("「{}」を追加しました", task.name));
        self.unscheduled.push(task);
        self.catalog_duration_idx = None;
    }

    /// Create a card from the free-input form, if valid.
    pub fn create_from_form(&mut self) {
        let Some(task) = self.form.take_task() else {
            return;
        };
        info!(name = %task.name, duration = task.duration, "created free-form card");
        self.set_status(format!("「{}」を追加しました", task.name));
        self.unscheduled.push(task);
        self.form_field = FormField::Name;
    }

    /// The unscheduled task currently carried by a grab, if any.
    pub fn grabbed_task(&self) -> Option<&Task> {
        let grab = self.grab.as_ref()?;
        self.unscheduled.iter().find(|t| t.id == grab.task_id)
    }

    /// Confirm the current grab: one atomic accept-or-reject placement.
    /// On rejection nothing moves and the grab stays active.
    pub fn drop_grabbed(&mut self) {
        let Some(grab) = self.grab.clone() else {
            return;
        };
        let Some(slot) = self.slots.get(grab.slot_cursor).cloned() else {
            return;
        };
        let Some(task) = self.grabbed_task().cloned() else {
            // Card vanished mid-grab; treat like a cancelled drag
            debug!(task_id = %grab.task_id, "grabbed card no longer exists");
            self.grab = None;
            self.mode = Mode::Navigate;
            return;
        };
        match schedule::try_place(&task, &slot, &self.scheduled) {
            Ok(placed) => {
                self.set_status(format!(
                    "{} - {} に「{}」を配置しました",
                    placed.start_time, placed.end_time, placed.name
                ));
                self.scheduled.push(placed);
                self.unscheduled.retain(|t| t.id != task.id);
                self.clamp_unscheduled_cursor();
                self.grid_cursor = grab.slot_cursor;
                self.grab = None;
                self.mode = Mode::Navigate;
            }
            Err(e) => {
                // Stay in grab mode so the user can pick another slot
                self.set_status(format!("配置できません: {}", e));
            }
        }
    }

    /// Delete the unscheduled card under the cursor.
    pub fn remove_unscheduled_at_cursor(&mut self) {
        if self.unscheduled_cursor < self.unscheduled.len() {
            let task = self.unscheduled.remove(self.unscheduled_cursor);
            self.set_status(format!("「{}」を削除しました", task.name));
            self.clamp_unscheduled_cursor();
        }
    }

    /// Remove the placement whose interval covers the grid cursor's slot.
    pub fn remove_placement_at_cursor(&mut self) {
        let Some(slot) = self.slots.get(self.grid_cursor) else {
            return;
        };
        let covering = self.scheduled.iter().find(|t| {
            t.start_time == *slot || schedule::slot_is_covered(std::slice::from_ref(*t), slot)
        });
        if let Some(found) = covering {
            let id = found.id.clone();
            let name = found.name.clone();
            schedule::remove_placement(&mut self.scheduled, &id);
            self.set_status(format!("「{}」の配置を解除しました", name));
        }
    }

    /// Today's report text, derived fresh on every call.
    pub fn report_text(&self) -> String {
        report::generate_report(&self.scheduled, Local::now().date_naive())
    }

    pub fn copy_report(&mut self) {
        let text = self.report_text();
        if clipboard::copy_to_clipboard(&text) {
            self.set_status("日報をクリップボードにコピーしました");
        } else {
            self.set_status("クリップボードにコピーできませんでした");
        }
    }

    /// Apply the typed filter input as a case-insensitive regex, falling back
    /// to a literal match when the pattern does not compile.
    pub fn apply_filter(&mut self) {
        if self.filter_input.is_empty() {
            self.filter = None;
        } else {
            self.filter = Regex::new(&format!("(?i){}", self.filter_input))
                .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(&self.filter_input))))
                .ok();
        }
        self.catalog_cursor = 0;
    }

    pub fn clear_filter(&mut self) {
        self.filter_input.clear();
        self.filter = None;
        self.catalog_cursor = 0;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clamp_unscheduled_cursor(&mut self) {
        if self.unscheduled_cursor >= self.unscheduled.len() {
            self.unscheduled_cursor = self.unscheduled.len().saturating_sub(1);
        }
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let catalog = build_catalog(&config);
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(catalog, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Fresh App over the built-in catalog and default theme, for tests.
#[cfg(test)]
pub(crate) fn test_app() -> App {
    let config = crate::model::config::AppConfig::default();
    App::new(build_catalog(&config), Theme::default())
}

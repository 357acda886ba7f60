use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nippo", about = concat!("nippo v", env!("CARGO_PKG_VERSION"), " - compose your daily work report"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the predefined task catalog, grouped by category
    Catalog,
    /// List the time grid's slot labels (07:00-23:00, 30 minute steps)
    Slots,
    /// List the selectable duration choices
    Durations,
    /// Compose a report from placement entries, one "HH:MM,minutes,name[,description]" per entry
    Report(ReportArgs),
}

#[derive(Args)]
pub struct ReportArgs {
    /// Placement entries like "09:00,90,処方入力" or "13:00,60,監査,外来分"
    #[arg(required = true)]
    pub entries: Vec<String>,

    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Also copy the report text to the clipboard
    #[arg(long)]
    pub copy: bool,
}

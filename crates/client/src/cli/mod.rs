//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dashcal_core::calendar::{EventFilter, ViewMode};

/// Lay out dashboard calendar events for month, week and day views.
#[derive(Debug, Parser)]
#[command(name = "dashcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty", env = "DASHCAL_FORMAT")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI view mode (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    #[default]
    Month,
    Week,
    Day,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Month => ViewMode::Month,
            ViewArg::Week => ViewMode::Week,
            ViewArg::Day => ViewMode::Day,
        }
    }
}

/// Options describing which events to lay out and how.
#[derive(Debug, Clone, Args)]
pub struct EventArgs {
    /// JSON file with an array of events, or `-` for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    /// Calendar view.
    #[arg(long, value_enum, default_value = "month", env = "DASHCAL_VIEW")]
    pub view: ViewArg,

    /// Hide task events.
    #[arg(long)]
    pub hide_tasks: bool,

    /// Hide meeting events.
    #[arg(long)]
    pub hide_meetings: bool,

    /// Only keep events inside the view window around this date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl EventArgs {
    pub fn filter(&self) -> EventFilter {
        EventFilter::new(!self.hide_tasks, !self.hide_meetings)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.into()
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the display list for a view.
    Layout {
        #[command(flatten)]
        events: EventArgs,
    },
    /// Select a display entry and print what the calendar would open.
    Select {
        #[command(flatten)]
        events: EventArgs,
        /// Position of the display entry (0-based).
        #[arg(long)]
        index: usize,
        /// Position inside the opened overview (0-based).
        #[arg(long)]
        member: Option<usize>,
    },
    /// Print the date range a view shows.
    Window {
        /// Anchor date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Calendar view.
        #[arg(long, value_enum, default_value = "month")]
        view: ViewArg,
    },
}

//! Command execution.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use dashcal_core::cache::LayoutCache;
use dashcal_core::calendar::{CalendarView, Event, InteractionResolver, Layout, ViewWindow};

use crate::cli::{Cli, Commands, EventArgs, OutputFormat};
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::output::{format_output, pretty};
use crate::selection::{Opened, RecordingHandler};
use crate::source::{load_events, restrict_to_window};

/// Runs a parsed command and returns its output.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    match &cli.command {
        Commands::Layout { events } => {
            let loaded = load_events(&events.input)?;
            let layout = layout_for(loaded, events, config)?;
            Ok(match cli.format {
                OutputFormat::Json => format_output(&layout, cli.format),
                OutputFormat::Pretty => pretty::format_layout(&layout),
            })
        }
        Commands::Select {
            events,
            index,
            member,
        } => {
            let loaded = load_events(&events.input)?;
            let layout = layout_for(loaded, events, config)?;
            let opened = select(&layout, *index, *member)?;
            Ok(match cli.format {
                OutputFormat::Json => format_output(&opened, cli.format),
                OutputFormat::Pretty => pretty::format_opened(&opened),
            })
        }
        Commands::Window { date, view } => {
            let window = ViewWindow::for_view(*date, (*view).into());
            Ok(match cli.format {
                OutputFormat::Json => format_output(&window, cli.format),
                OutputFormat::Pretty => pretty::format_window(&window),
            })
        }
    }
}

/// Lays out `events` according to the command line options.
pub fn layout_for(events: Vec<Event>, args: &EventArgs, config: &Config) -> Result<Layout> {
    let view_mode = args.view_mode();
    let events = match args.date {
        Some(anchor) => restrict_to_window(events, anchor, view_mode),
        None => events,
    };

    let mut view = CalendarView::new(events)
        .with_view_mode(view_mode)
        .with_filter(args.filter())
        .with_options(config.layout_options())
        .with_cache(LayoutCache::new(config.cache_max_entries)?);

    Ok(view.layout())
}

/// Selects the entry at `index`, then optionally the overview member at
/// `member`, and returns what was opened last.
pub fn select(layout: &Layout, index: usize, member: Option<usize>) -> Result<Opened> {
    let entry = layout
        .entries
        .get(index)
        .ok_or(ClientError::EntryOutOfRange {
            index,
            len: layout.entries.len(),
        })?;

    let mut resolver = InteractionResolver::new(RecordingHandler::default());
    resolver.select(entry);
    if let Some(member) = member {
        resolver.select_overview_member(member)?;
    }

    resolver
        .into_handler()
        .into_opened()
        .pop()
        .ok_or_else(|| ClientError::InvalidInput("selection opened nothing".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ViewArg;
    use crate::source::parse_events;
    use dashcal_core::calendar::{InteractionError, ViewMode};
    use std::path::PathBuf;

    const EVENTS: &str = r#"[
        {"id": "a", "title": "A", "start": "2024-01-15T09:00:00", "end": "2024-01-15T09:30:00", "kind": "meeting"},
        {"id": "b", "title": "B", "start": "2024-01-15T09:05:00", "end": "2024-01-15T10:00:00", "kind": "meeting"},
        {"id": "c", "title": "C", "start": "2024-01-15T09:07:00", "end": "2024-01-15T09:10:00", "kind": "meeting"},
        {"id": "t", "title": "Report", "start": "2024-01-16T17:00:00", "end": "2024-01-16T17:00:00", "kind": "task"},
        {"id": "n", "title": "Next month", "start": "2024-02-02T10:00:00", "end": "2024-02-02T11:00:00", "kind": "task"}
    ]"#;

    fn args(view: ViewArg) -> EventArgs {
        EventArgs {
            input: PathBuf::from("-"),
            view,
            hide_tasks: false,
            hide_meetings: false,
            date: None,
        }
    }

    fn week_layout() -> Layout {
        let events = parse_events(EVENTS).unwrap();
        layout_for(events, &args(ViewArg::Week), &Config::default()).unwrap()
    }

    #[test]
    fn test_layout_for_week() {
        let layout = week_layout();

        assert_eq!(layout.view, ViewMode::Week);
        let titles: Vec<&str> = layout.entries.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["C", "+2 more", "Report", "Next month"]);
    }

    #[test]
    fn test_layout_for_month_with_window() {
        let events = parse_events(EVENTS).unwrap();
        let mut month = args(ViewArg::Month);
        month.date = chrono::NaiveDate::from_ymd_opt(2024, 1, 20);

        let layout = layout_for(events, &month, &Config::default()).unwrap();

        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn test_layout_for_hidden_tasks() {
        let events = parse_events(EVENTS).unwrap();
        let mut week = args(ViewArg::Week);
        week.hide_tasks = true;

        let layout = layout_for(events, &week, &Config::default()).unwrap();

        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_select_plain_event() {
        let layout = week_layout();
        let opened = select(&layout, 0, None).unwrap();

        match opened {
            Opened::Detail { event } => assert_eq!(event.id, "c"),
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[test]
    fn test_select_overflow_then_member() {
        let layout = week_layout();

        let overview = select(&layout, 1, None).unwrap();
        match overview {
            Opened::Overview { members, .. } => assert_eq!(members.len(), 2),
            other => panic!("expected overview, got {:?}", other),
        }

        let detail = select(&layout, 1, Some(1)).unwrap();
        match detail {
            Opened::Detail { event } => assert_eq!(event.id, "b"),
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[test]
    fn test_select_out_of_range() {
        let layout = week_layout();
        assert!(matches!(
            select(&layout, 10, None),
            Err(ClientError::EntryOutOfRange { index: 10, len: 4 })
        ));
    }

    #[test]
    fn test_select_member_without_overview() {
        let layout = week_layout();
        assert!(matches!(
            select(&layout, 0, Some(0)),
            Err(ClientError::Interaction(InteractionError::NoOverview))
        ));
    }

    #[test]
    fn test_run_window_json() {
        let cli = Cli {
            format: OutputFormat::Json,
            quiet: false,
            command: Commands::Window {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
                view: ViewArg::Week,
            },
        };

        let output = run(&cli, &Config::default()).unwrap();

        assert_eq!(output, r#"{"start":"2024-01-15","end":"2024-01-21"}"#);
    }
}

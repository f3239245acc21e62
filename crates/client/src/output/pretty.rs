//! Pretty output formatting.

use dashcal_core::calendar::{
    DiagnosticAction, DisplayEntry, Event, Layout, LayoutDiagnostic, OverflowEvent, ViewWindow,
};

use crate::selection::Opened;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn format_span(event: &Event) -> String {
    match (event.start, event.end) {
        (Some(start), Some(end)) if start == end => start.format(TIME_FORMAT).to_string(),
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format(TIME_FORMAT),
            end.format(TIME_FORMAT)
        ),
        (Some(start), None) => format!("{} - ?", start.format(TIME_FORMAT)),
        (None, _) => "unscheduled".to_string(),
    }
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  When: {}",
        event.title,
        event.kind.label(),
        event.id,
        format_span(event)
    );
    if let Some(team) = event.team_name.as_ref().or(event.team_id.as_ref()) {
        output.push_str(&format!("\n  Team: {}", team));
    }
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format an overflow entry for display.
pub fn format_overflow(overflow: &OverflowEvent) -> String {
    let hidden: Vec<&str> = overflow.hidden().iter().map(|e| e.title.as_str()).collect();
    format!(
        "{} [slot {}]\n  Hidden: {}",
        overflow.title,
        overflow.slot,
        hidden.join(", ")
    )
}

fn format_diagnostic(diagnostic: &LayoutDiagnostic) -> String {
    let action = match diagnostic.action {
        DiagnosticAction::Excluded => "excluded",
        DiagnosticAction::Clamped => "clamped to zero duration",
        DiagnosticAction::Kept => "kept",
    };
    format!(
        "  {} ({}): {}, {}",
        diagnostic.title, diagnostic.event_id, diagnostic.error, action
    )
}

/// Format a layout for display.
pub fn format_layout(layout: &Layout) -> String {
    if layout.is_empty() && layout.diagnostics.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!(
        "{} VIEW ({})\n",
        layout.view.as_str().to_uppercase(),
        layout.len()
    );
    output.push_str(&"-".repeat(40));
    for (index, entry) in layout.entries.iter().enumerate() {
        let body = match entry {
            DisplayEntry::Event(event) => format_event(event),
            DisplayEntry::Overflow(overflow) => format_overflow(overflow),
        };
        output.push_str(&format!("\n#{} {}", index, body));
        output.push('\n');
    }
    if !layout.diagnostics.is_empty() {
        output.push_str(&format!("\nWARNINGS ({})", layout.diagnostics.len()));
        for diagnostic in &layout.diagnostics {
            output.push_str(&format!("\n{}", format_diagnostic(diagnostic)));
        }
    }
    output
}

/// Format what a selection opened.
pub fn format_opened(opened: &Opened) -> String {
    match opened {
        Opened::Detail { event } => format!("DETAIL\n{}", format_event(event)),
        Opened::Overview { slot_time, members } => {
            let mut output = format!(
                "OVERVIEW {} ({})\n",
                slot_time.format(TIME_FORMAT),
                members.len()
            );
            output.push_str(&"-".repeat(40));
            for (index, event) in members.iter().enumerate() {
                output.push_str(&format!("\n#{} {}", index, format_event(event)));
                output.push('\n');
            }
            output
        }
    }
}

/// Format a view window for display.
pub fn format_window(window: &ViewWindow) -> String {
    format!(
        "{} to {} ({} days)",
        window.start,
        window.end,
        window.dates().len()
    )
}

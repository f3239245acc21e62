//! Event source: loads the events of the current view window.
//!
//! Payloads are either a bare JSON array of events or an API envelope
//! of the form `{"events": [...]}`.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use dashcal_core::calendar::{filter_events_in_window, Event, ViewMode, ViewWindow};
use serde::Deserialize;

use crate::error::{ClientError, Result};

#[derive(Deserialize)]
struct Envelope {
    events: Vec<Event>,
}

/// Parses events from a JSON payload.
///
/// Errors keep serde's position so the rejected event can be found.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let trimmed = json.trim_start();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidInput("event payload is empty".to_string()));
    }

    match serde_json::from_str::<Vec<Event>>(json) {
        Ok(events) => Ok(events),
        Err(_) if trimmed.starts_with('{') => {
            let envelope: Envelope = serde_json::from_str(json)?;
            Ok(envelope.events)
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads events from a file, or from stdin when the path is `-`.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let events = parse_events(&json)?;
    tracing::debug!(count = events.len(), source = %path.display(), "Loaded events");
    Ok(events)
}

/// Trims events to the window `view` shows around `anchor`.
pub fn restrict_to_window(events: Vec<Event>, anchor: NaiveDate, view: ViewMode) -> Vec<Event> {
    let window = ViewWindow::for_view(anchor, view);
    let kept: Vec<Event> = filter_events_in_window(&events, window)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        start = %window.start,
        end = %window.end,
        kept = kept.len(),
        dropped = events.len() - kept.len(),
        "Restricted events to view window"
    );
    kept
}

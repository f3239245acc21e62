//! Turns filtered events into the display list for a view.
//!
//! Month view passes events through as-is. Week and day views group
//! events into quarter-hour slots, emit each slot's primary, and follow
//! every colliding slot's primary with a "+N more" overflow entry.
//!
//! This is part of the Functional Core: the same events and view always
//! produce the same layout.

use serde::Serialize;

use super::error::EventError;
use super::filter::EventFilter;
use super::overflow::{overflow_for_group, OverflowOffsets};
use super::slots::group_into_slots;
use super::types::{DisplayEntry, Event, ViewMode};

/// Tuning for a layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutOptions {
    pub overflow_offsets: OverflowOffsets,
}

impl LayoutOptions {
    pub fn with_overflow_offsets(mut self, offsets: OverflowOffsets) -> Self {
        self.overflow_offsets = offsets;
        self
    }
}

/// What the engine did with a malformed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticAction {
    /// Left out of this pass.
    Excluded,
    /// Laid out with its duration treated as zero.
    Clamped,
    /// Passed through unchanged (month view).
    Kept,
}

/// A problem found on an input event during a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDiagnostic {
    pub event_id: String,
    pub title: String,
    pub error: EventError,
    pub action: DiagnosticAction,
}

/// The display list for one view, plus any diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub view: ViewMode,
    pub entries: Vec<DisplayEntry>,
    pub diagnostics: Vec<LayoutDiagnostic>,
}

impl Layout {
    /// Number of overflow entries in the display list.
    pub fn overflow_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_overflow()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Checks an event's instants.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    let Some(start) = event.start else {
        return Err(EventError::MissingStart);
    };
    match event.end {
        None => Err(EventError::MissingEnd),
        Some(end) if end < start => Err(EventError::EndBeforeStart),
        Some(_) => Ok(()),
    }
}

/// Builds the display list for `events` (already filtered) in `view`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashcal_core::calendar::{select_layout, Event, LayoutOptions, ViewMode};
///
/// let at = |h, m| NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(h, m, 0).unwrap();
/// let a = Event::meeting("a", "A", at(9, 0), at(9, 30));
/// let b = Event::meeting("b", "B", at(9, 5), at(10, 0));
/// let c = Event::meeting("c", "C", at(9, 7), at(9, 10));
///
/// let layout = select_layout(&[&a, &b, &c], ViewMode::Week, &LayoutOptions::default());
///
/// assert_eq!(layout.entries.len(), 2);
/// assert_eq!(layout.entries[0].title(), "C");
/// assert_eq!(layout.entries[1].title(), "+2 more");
/// ```
pub fn select_layout(events: &[&Event], view: ViewMode, options: &LayoutOptions) -> Layout {
    let layout = if view.uses_time_grid() {
        grid_layout(events, view, options)
    } else {
        month_layout(events)
    };

    tracing::debug!(
        view = %view,
        input = events.len(),
        entries = layout.entries.len(),
        overflows = layout.overflow_count(),
        diagnostics = layout.diagnostics.len(),
        "Computed calendar layout"
    );

    layout
}

/// Filters `events` and lays them out in one step.
pub fn compute_layout(
    events: &[Event],
    filter: EventFilter,
    view: ViewMode,
    options: &LayoutOptions,
) -> Layout {
    let visible = filter.apply(events);
    select_layout(&visible, view, options)
}

fn month_layout(events: &[&Event]) -> Layout {
    let diagnostics = events
        .iter()
        .filter_map(|event| diagnose(event, DiagnosticAction::Kept))
        .collect();

    Layout {
        view: ViewMode::Month,
        entries: events
            .iter()
            .map(|event| DisplayEntry::Event((*event).clone()))
            .collect(),
        diagnostics,
    }
}

fn grid_layout(events: &[&Event], view: ViewMode, options: &LayoutOptions) -> Layout {
    let mut diagnostics = Vec::new();
    for event in events {
        let action = if event.start.is_some() {
            DiagnosticAction::Clamped
        } else {
            DiagnosticAction::Excluded
        };
        diagnostics.extend(diagnose(event, action));
    }

    let grouping = group_into_slots(events);
    let mut entries = Vec::with_capacity(grouping.slots.len() * 2);

    for group in &grouping.slots {
        entries.push(DisplayEntry::Event(group.primary().clone()));
        if let Some(overflow) = overflow_for_group(group, options.overflow_offsets) {
            entries.push(DisplayEntry::Overflow(overflow));
        }
    }

    Layout {
        view,
        entries,
        diagnostics,
    }
}

fn diagnose(event: &Event, action: DiagnosticAction) -> Option<LayoutDiagnostic> {
    let error = validate_event(event).err()?;

    tracing::warn!(
        event_id = %event.id,
        title = %event.title,
        error = %error,
        action = ?action,
        "Malformed calendar event"
    );

    Some(LayoutDiagnostic {
        event_id: event.id.clone(),
        title: event.title.clone(),
        error,
        action,
    })
}

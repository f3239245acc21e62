use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use super::types::{Event, ViewMode};

/// Inclusive date range shown by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ViewWindow {
    /// Returns the window `view` shows around `anchor`.
    ///
    /// Month covers the anchor's calendar month, week runs Monday to
    /// Sunday, and day is the anchor alone.
    pub fn for_view(anchor: NaiveDate, view: ViewMode) -> Self {
        match view {
            ViewMode::Month => {
                let first = anchor - Duration::days(i64::from(anchor.day0()));
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                Self {
                    start: first,
                    end: last,
                }
            }
            ViewMode::Week => {
                let dates = get_calendar_week(anchor);
                Self {
                    start: dates[0],
                    end: dates[6],
                }
            }
            ViewMode::Day => Self {
                start: anchor,
                end: anchor,
            },
        }
    }

    /// Returns every date in the window, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }

    /// Returns true if the event starts inside this window.
    pub fn contains(&self, event: &Event) -> bool {
        event
            .start
            .is_some_and(|start| start.date() >= self.start && start.date() <= self.end)
    }
}

/// Returns the dates for the week containing the given date (Monday to Sunday).
pub fn get_calendar_week(date: NaiveDate) -> Vec<NaiveDate> {
    let weekday = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(weekday);

    (0..7)
        .map(|offset| monday + Duration::days(offset))
        .collect()
}

/// Keeps the events that start inside the window, preserving order.
pub fn filter_events_in_window(events: &[Event], window: ViewWindow) -> Vec<&Event> {
    events.iter().filter(|event| window.contains(event)).collect()
}

use serde::{Deserialize, Serialize};

use super::types::{Event, EventKind};

/// Kind-visibility toggles set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    pub show_tasks: bool,
    pub show_meetings: bool,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            show_tasks: true,
            show_meetings: true,
        }
    }
}

impl EventFilter {
    pub fn new(show_tasks: bool, show_meetings: bool) -> Self {
        Self {
            show_tasks,
            show_meetings,
        }
    }

    /// Returns true if events of this kind are visible.
    pub fn allows(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Task => self.show_tasks,
            EventKind::Meeting => self.show_meetings,
        }
    }

    /// Keeps visible events, preserving their relative order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, *self)
    }
}

/// Filters events by the kind toggles. Order is preserved.
pub fn filter_events(events: &[Event], filter: EventFilter) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| filter.allows(event.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_instant(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::task("t1", "Write report", make_instant(9, 0)),
            Event::meeting("m1", "Standup", make_instant(9, 0), make_instant(9, 15)),
            Event::task("t2", "Review PR", make_instant(11, 0)),
            Event::meeting("m2", "Retro", make_instant(15, 0), make_instant(16, 0)),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let events = sample_events();
        let filtered = EventFilter::default().apply(&events);
        assert_eq!(ids(&filtered), vec!["t1", "m1", "t2", "m2"]);
    }

    #[test]
    fn test_hide_meetings_preserves_order() {
        let events = sample_events();
        let filtered = filter_events(&events, EventFilter::new(true, false));
        assert_eq!(ids(&filtered), vec!["t1", "t2"]);
    }

    #[test]
    fn test_hide_tasks() {
        let events = sample_events();
        let filtered = filter_events(&events, EventFilter::new(false, true));
        assert_eq!(ids(&filtered), vec!["m1", "m2"]);
    }

    #[test]
    fn test_hide_both() {
        let events = sample_events();
        assert!(filter_events(&events, EventFilter::new(false, false)).is_empty());
    }

    #[test]
    fn test_allows() {
        let filter = EventFilter::new(false, true);
        assert!(!filter.allows(EventKind::Task));
        assert!(filter.allows(EventKind::Meeting));
    }
}

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::calendar::{Event, LayoutOptions, ViewMode};

/// Returns a 64-bit fingerprint of an ordered event list.
///
/// Equal lists (same events, same order) always produce the same
/// fingerprint within a process.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashcal_core::cache::fingerprint_events;
/// use dashcal_core::calendar::Event;
///
/// let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let a = Event::task("a", "A", due);
/// let b = Event::task("b", "B", due);
///
/// assert_eq!(fingerprint_events(&[&a, &b]), fingerprint_events(&[&a, &b]));
/// assert_ne!(fingerprint_events(&[&a, &b]), fingerprint_events(&[&b, &a]));
/// ```
pub fn fingerprint_events(events: &[&Event]) -> u64 {
    let mut hasher = DefaultHasher::new();
    events.len().hash(&mut hasher);
    for event in events {
        event.hash(&mut hasher);
    }
    hasher.finish()
}

/// Memo key for a computed layout.
///
/// Hashing uses the fingerprint, while equality compares the events
/// themselves, so two inputs with colliding fingerprints never share a
/// memo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutKey {
    pub fingerprint: u64,
    pub events: Vec<Event>,
    pub view: ViewMode,
    pub options: LayoutOptions,
}

impl LayoutKey {
    pub fn new(events: &[&Event], view: ViewMode, options: LayoutOptions) -> Self {
        Self {
            fingerprint: fingerprint_events(events),
            events: events.iter().map(|event| (*event).clone()).collect(),
            view,
            options,
        }
    }
}

impl Hash for LayoutKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
        self.view.hash(state);
        self.options.hash(state);
    }
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

    #[test]
    fn test_fingerprint_changes_with_content() {
        let a = Event::task("a", "A", make_instant(9, 0));
        let mut renamed = a.clone();
        renamed.title = "A (moved)".to_string();

        assert_ne!(fingerprint_events(&[&a]), fingerprint_events(&[&renamed]));
    }

    #[test]
    fn test_fingerprint_empty() {
        assert_eq!(fingerprint_events(&[]), fingerprint_events(&[]));
    }

    #[test]
    fn test_layout_key_distinguishes_view() {
        let a = Event::task("a", "A", make_instant(9, 0));
        let week = LayoutKey::new(&[&a], ViewMode::Week, LayoutOptions::default());
        let day = LayoutKey::new(&[&a], ViewMode::Day, LayoutOptions::default());

        assert_ne!(week, day);
        assert_eq!(week.fingerprint, day.fingerprint);
    }

    #[test]
    fn test_layout_key_compares_events_not_only_fingerprint() {
        let a = Event::task("a", "A", make_instant(9, 0));
        let b = Event::task("b", "B", make_instant(10, 0));
        let real = LayoutKey::new(&[&a], ViewMode::Week, LayoutOptions::default());
        let colliding = LayoutKey {
            events: vec![b],
            ..real.clone()
        };

        assert_eq!(real.fingerprint, colliding.fingerprint);
        assert_ne!(real, colliding);
    }
}

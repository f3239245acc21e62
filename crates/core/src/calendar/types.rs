use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::error::ViewModeParseError;
use crate::serde::{
    deserialize_id, deserialize_lenient_instant, deserialize_optional_id,
    deserialize_optional_string,
};

/// The kind of calendar item, used by the visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A task positioned at its due date.
    Task,
    /// A meeting with a start and end time.
    Meeting,
}

impl EventKind {
    /// Returns a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Task => "task",
            EventKind::Meeting => "meeting",
        }
    }

    /// Returns true if this is a task.
    pub fn is_task(&self) -> bool {
        matches!(self, EventKind::Task)
    }

    /// Returns true if this is a meeting.
    pub fn is_meeting(&self) -> bool {
        matches!(self, EventKind::Meeting)
    }
}

/// A time-stamped item supplied by the event source.
///
/// Instants are local wall-clock times. They are optional because the
/// source may send malformed values; the layout engine reports those
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient_instant")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient_instant")]
    pub end: Option<NaiveDateTime>,
    pub kind: EventKind,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Event {
    /// Creates a meeting spanning `start..end`.
    pub fn meeting(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: Some(start),
            end: Some(end),
            kind: EventKind::Meeting,
            team_id: None,
            team_name: None,
            description: None,
        }
    }

    /// Creates a task due at `due`. Tasks occupy a zero-duration instant.
    pub fn task(id: impl Into<String>, title: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: Some(due),
            end: Some(due),
            kind: EventKind::Task,
            team_id: None,
            team_name: None,
            description: None,
        }
    }

    /// Sets the owning team.
    pub fn with_team(mut self, team_id: impl Into<String>, team_name: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self.team_name = Some(team_name.into());
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the end used for layout: a missing end or one before the
    /// start collapses onto the start.
    pub fn effective_end(&self) -> Option<NaiveDateTime> {
        let start = self.start?;
        Some(self.end.filter(|end| *end >= start).unwrap_or(start))
    }

    /// Returns the duration used for ordering, never negative.
    pub fn duration(&self) -> Duration {
        match (self.start, self.effective_end()) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }
}

/// The calendar view the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewMode {
    /// Returns true if this view lays events on an hourly grid and needs
    /// slot grouping.
    pub fn uses_time_grid(&self) -> bool {
        matches!(self, ViewMode::Week | ViewMode::Day)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            other => Err(ViewModeParseError(other.to_string())),
        }
    }
}

/// A quarter-hour bucket on the calendar grid.
///
/// Ordering is chronological: date, then hour, then quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlotKey {
    date: NaiveDate,
    hour: u32,
    quarter: u32,
}

impl SlotKey {
    /// Returns the slot containing the given instant.
    pub fn containing(instant: NaiveDateTime) -> Self {
        Self {
            date: instant.date(),
            hour: instant.hour(),
            quarter: instant.minute() / 15,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Quarter of the hour, 0 through 3.
    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    /// Returns the first instant of the slot.
    pub fn start(&self) -> NaiveDateTime {
        let time =
            NaiveTime::from_hms_opt(self.hour, self.quarter * 15, 0).unwrap_or(NaiveTime::MIN);
        self.date.and_time(time)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.date, self.hour, self.quarter * 15)
    }
}

/// Synthetic "+N more" entry standing in for a colliding slot.
///
/// Rebuilt on every layout pass. `members` is an owned snapshot of the
/// slot, primary first, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub slot: SlotKey,
    pub members: Vec<Event>,
}

impl OverflowEvent {
    /// The event shown on the grid for this slot.
    pub fn primary(&self) -> Option<&Event> {
        self.members.first()
    }

    /// Members not visible on the grid (everything but the primary).
    pub fn hidden(&self) -> &[Event] {
        self.members.get(1..).unwrap_or_default()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden().len()
    }

    /// First instant of the summarized slot.
    pub fn slot_time(&self) -> NaiveDateTime {
        self.slot.start()
    }
}

/// One item of the list handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayEntry {
    Event(Event),
    Overflow(OverflowEvent),
}

impl DisplayEntry {
    pub fn title(&self) -> &str {
        match self {
            DisplayEntry::Event(event) => &event.title,
            DisplayEntry::Overflow(overflow) => &overflow.title,
        }
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        match self {
            DisplayEntry::Event(event) => event.start,
            DisplayEntry::Overflow(overflow) => Some(overflow.start),
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            DisplayEntry::Event(event) => Some(event),
            DisplayEntry::Overflow(_) => None,
        }
    }

    pub fn as_overflow(&self) -> Option<&OverflowEvent> {
        match self {
            DisplayEntry::Overflow(overflow) => Some(overflow),
            DisplayEntry::Event(_) => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, DisplayEntry::Overflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_instant(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_event_builders() {
        let event = Event::meeting("m1", "Standup", make_instant(9, 0), make_instant(9, 15))
            .with_team("t1", "Platform")
            .with_description("Daily sync");

        assert_eq!(event.kind, EventKind::Meeting);
        assert_eq!(event.team_id.as_deref(), Some("t1"));
        assert_eq!(event.team_name.as_deref(), Some("Platform"));
        assert_eq!(event.description.as_deref(), Some("Daily sync"));
        assert_eq!(event.duration(), Duration::minutes(15));
    }

    #[test]
    fn test_task_is_zero_duration() {
        let task = Event::task("t1", "Ship release", make_instant(17, 0));
        assert!(task.kind.is_task());
        assert_eq!(task.start, task.end);
        assert_eq!(task.duration(), Duration::zero());
    }

    #[test]
    fn test_duration_clamps_inverted_range() {
        let event = Event::meeting("m1", "Backwards", make_instant(10, 0), make_instant(9, 0));
        assert_eq!(event.duration(), Duration::zero());
        assert_eq!(event.effective_end(), Some(make_instant(10, 0)));
    }

    #[test]
    fn test_duration_missing_instants() {
        let mut event = Event::meeting("m1", "No end", make_instant(10, 0), make_instant(11, 0));
        event.end = None;
        assert_eq!(event.duration(), Duration::zero());
        assert_eq!(event.effective_end(), Some(make_instant(10, 0)));

        event.start = None;
        assert_eq!(event.effective_end(), None);
        assert_eq!(event.duration(), Duration::zero());
    }

    #[test]
    fn test_event_deserialize_api_payload() {
        let json = r#"{
            "id": 12,
            "title": "Sprint review",
            "start": "2024-01-15T14:00:00",
            "end": "2024-01-15T15:00:00",
            "kind": "meeting",
            "teamId": 3,
            "teamName": "Core",
            "description": ""
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "12");
        assert_eq!(event.start, Some(make_instant(14, 0)));
        assert_eq!(event.team_id.as_deref(), Some("3"));
        assert_eq!(event.team_name.as_deref(), Some("Core"));
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_event_deserialize_bad_instant() {
        let json = r#"{"id": "x", "title": "Broken", "start": "??", "kind": "task"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.start, None);
        assert_eq!(event.end, None);
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("week".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert_eq!(" Day ".parse::<ViewMode>(), Ok(ViewMode::Day));
        assert_eq!("MONTH".parse::<ViewMode>(), Ok(ViewMode::Month));
        assert!("year".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Week.to_string(), "week");
        assert!(ViewMode::Day.uses_time_grid());
        assert!(!ViewMode::Month.uses_time_grid());
    }

    #[test]
    fn test_slot_key_quarters() {
        assert_eq!(SlotKey::containing(make_instant(9, 0)).quarter(), 0);
        assert_eq!(SlotKey::containing(make_instant(9, 14)).quarter(), 0);
        assert_eq!(SlotKey::containing(make_instant(9, 15)).quarter(), 1);
        assert_eq!(SlotKey::containing(make_instant(9, 59)).quarter(), 3);

        let key = SlotKey::containing(make_instant(9, 37));
        assert_eq!(key.hour(), 9);
        assert_eq!(key.start(), make_instant(9, 30));
        assert_eq!(key.to_string(), "2024-01-15 09:30");
    }

    #[test]
    fn test_slot_key_ordering_is_chronological() {
        let a = SlotKey::containing(make_instant(9, 50));
        let b = SlotKey::containing(make_instant(10, 0));
        let next_day = SlotKey::containing(make_instant(8, 0) + Duration::days(1));

        assert!(a < b);
        assert!(b < next_day);
    }

    #[test]
    fn test_overflow_hidden_members() {
        let a = Event::task("a", "A", make_instant(9, 0));
        let b = Event::task("b", "B", make_instant(9, 1));
        let overflow = OverflowEvent {
            title: "+1 more".to_string(),
            start: make_instant(9, 5),
            end: make_instant(9, 15),
            slot: SlotKey::containing(make_instant(9, 0)),
            members: vec![a.clone(), b.clone()],
        };

        assert_eq!(overflow.primary(), Some(&a));
        assert_eq!(overflow.hidden(), &[b]);
        assert_eq!(overflow.hidden_count(), 1);
        assert_eq!(overflow.slot_time(), make_instant(9, 0));
    }

    #[test]
    fn test_display_entry_serializes_tagged() {
        let entry = DisplayEntry::Event(Event::task("a", "A", make_instant(9, 0)));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "event");
        assert_eq!(value["kind"], "task");
        assert_eq!(value["title"], "A");
    }
}

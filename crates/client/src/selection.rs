//! Selection collaborator for the CLI.
//!
//! The CLI has no detail modal or overview list; it records what the
//! calendar asked to open so the output layer can print it.

use chrono::NaiveDateTime;
use dashcal_core::calendar::{Event, SelectionHandler};
use serde::Serialize;

/// What a selection asked the hosting surface to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "open", rename_all = "snake_case")]
pub enum Opened {
    Detail {
        event: Event,
    },
    Overview {
        #[serde(rename = "slotTime")]
        slot_time: NaiveDateTime,
        members: Vec<Event>,
    },
}

/// Records every callback in order.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    opened: Vec<Opened>,
}

impl RecordingHandler {
    pub fn opened(&self) -> &[Opened] {
        &self.opened
    }

    pub fn into_opened(self) -> Vec<Opened> {
        self.opened
    }
}

impl SelectionHandler for RecordingHandler {
    fn on_select_event(&mut self, event: &Event) {
        tracing::debug!(event_id = %event.id, "Opening event detail");
        self.opened.push(Opened::Detail {
            event: event.clone(),
        });
    }

    fn on_show_more(&mut self, members: &[Event], slot_time: NaiveDateTime) {
        tracing::debug!(members = members.len(), slot = %slot_time, "Opening slot overview");
        self.opened.push(Opened::Overview {
            slot_time,
            members: members.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashcal_core::calendar::{DisplayEntry, InteractionResolver};

    fn make_instant(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_records_detail() {
        let event = Event::task("t", "Deadline", make_instant(9, 0));
        let mut resolver = InteractionResolver::new(RecordingHandler::default());

        resolver.select(&DisplayEntry::Event(event.clone()));

        assert_eq!(
            resolver.handler().opened(),
            &[Opened::Detail { event }]
        );
    }

    #[test]
    fn test_opened_serializes_tagged() {
        let opened = Opened::Overview {
            slot_time: make_instant(9, 0),
            members: Vec::new(),
        };
        let value = serde_json::to_value(&opened).unwrap();

        assert_eq!(value["open"], "overview");
        assert_eq!(value["slotTime"], "2024-01-15T09:00:00");
    }
}

//! Maps selections on the rendered calendar to collaborator actions.
//!
//! Selecting a plain event opens its detail; selecting a "+N more" entry
//! opens an overview of the slot's hidden events. The overview is flat:
//! picking an item in it opens that item's detail, never another overview.

use chrono::NaiveDateTime;

use super::error::InteractionError;
use super::types::{DisplayEntry, Event, OverflowEvent};

/// Callbacks invoked when a selection resolves.
///
/// Implemented by the hosting surface (detail modal, overview list,
/// navigation).
pub trait SelectionHandler {
    /// Show the detail of a single event.
    fn on_select_event(&mut self, event: &Event);

    /// Show the events of a colliding slot that are hidden behind its
    /// primary.
    fn on_show_more(&mut self, members: &[Event], slot_time: NaiveDateTime);
}

/// Current selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Detail(Event),
    Overview {
        members: Vec<Event>,
        slot_time: NaiveDateTime,
    },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// Selection state machine driving a [`SelectionHandler`].
#[derive(Debug)]
pub struct InteractionResolver<H> {
    handler: H,
    state: Selection,
}

impl<H: SelectionHandler> InteractionResolver<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            state: Selection::Idle,
        }
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Resolves a selection on a rendered entry.
    pub fn select(&mut self, entry: &DisplayEntry) -> &Selection {
        match entry {
            DisplayEntry::Event(event) => self.open_detail(event),
            DisplayEntry::Overflow(overflow) => self.open_overview(overflow),
        }
        &self.state
    }

    /// Selects the event at `index` in the open overview.
    pub fn select_overview_member(&mut self, index: usize) -> Result<&Selection, InteractionError> {
        let Selection::Overview { members, .. } = &self.state else {
            return Err(InteractionError::NoOverview);
        };
        let event = members
            .get(index)
            .cloned()
            .ok_or(InteractionError::MemberOutOfRange {
                index,
                len: members.len(),
            })?;

        self.open_detail(&event);
        Ok(&self.state)
    }

    /// Returns to idle when the hosting surface is closed.
    pub fn dismiss(&mut self) {
        self.state = Selection::Idle;
    }

    fn open_detail(&mut self, event: &Event) {
        self.handler.on_select_event(event);
        self.state = Selection::Detail(event.clone());
    }

    fn open_overview(&mut self, overflow: &OverflowEvent) {
        let members = overflow.hidden().to_vec();
        let slot_time = overflow.slot_time();
        self.handler.on_show_more(&members, slot_time);
        self.state = Selection::Overview { members, slot_time };
    }
}

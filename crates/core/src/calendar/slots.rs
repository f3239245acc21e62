//! Quarter-hour slot grouping for the week and day grids.
//!
//! Events whose start falls in the same quarter hour collide on the grid.
//! Each slot is ordered so its first member (the primary) is the shortest
//! event, which is the one least likely to be truncated when drawn.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::types::{Event, SlotKey};

/// Returns the slot an event is drawn in, or None if it has no start.
pub fn slot_key(event: &Event) -> Option<SlotKey> {
    event.start.map(SlotKey::containing)
}

/// Orders slot members: duration, then start, then title, then id.
pub fn compare_slot_members(a: &Event, b: &Event) -> Ordering {
    a.duration()
        .cmp(&b.duration())
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts slot members so the primary comes first.
pub fn sort_slot_members(members: &mut [&Event]) {
    members.sort_by(|a, b| compare_slot_members(a, b));
}

/// Events sharing one slot, already in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGroup<'a> {
    pub key: SlotKey,
    pub members: Vec<&'a Event>,
}

impl<'a> SlotGroup<'a> {
    /// The event representing this slot on the grid.
    pub fn primary(&self) -> &'a Event {
        self.members[0]
    }

    /// Returns true if more than one event landed in this slot.
    pub fn has_collision(&self) -> bool {
        self.members.len() > 1
    }
}

/// Result of grouping: slots in chronological order plus events that
/// could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotGrouping<'a> {
    pub slots: Vec<SlotGroup<'a>>,
    pub unplaced: Vec<&'a Event>,
}

/// Groups events into quarter-hour slots.
///
/// Slots come out in chronological order and every group is non-empty
/// and sorted by [`compare_slot_members`]. Events without a start are
/// returned in `unplaced`, in input order.
pub fn group_into_slots<'a>(events: &[&'a Event]) -> SlotGrouping<'a> {
    let mut by_slot: BTreeMap<SlotKey, Vec<&'a Event>> = BTreeMap::new();
    let mut unplaced = Vec::new();

    for event in events {
        match slot_key(event) {
            Some(key) => by_slot.entry(key).or_default().push(*event),
            None => unplaced.push(*event),
        }
    }

    let slots = by_slot
        .into_iter()
        .map(|(key, mut members)| {
            sort_slot_members(&mut members);
            SlotGroup { key, members }
        })
        .collect();

    SlotGrouping { slots, unplaced }
}

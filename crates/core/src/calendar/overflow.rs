use chrono::Duration;

use super::slots::SlotGroup;
use super::types::{Event, OverflowEvent, SlotKey};

/// Placement of the "+N more" box relative to the slot's primary.
///
/// These are display offsets that keep the synthetic box from covering
/// the primary's box; they carry no scheduling meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowOffsets {
    /// Added to the primary's start.
    pub start: Duration,
    /// Added to the primary's end.
    pub end: Duration,
}

impl Default for OverflowOffsets {
    fn default() -> Self {
        Self {
            start: Duration::minutes(5),
            end: Duration::minutes(15),
        }
    }
}

impl OverflowOffsets {
    /// Builds offsets from minute counts. Returns None when either count
    /// does not fit in a `Duration`.
    pub fn from_minutes(start: i64, end: i64) -> Option<Self> {
        Some(Self {
            start: Duration::try_minutes(start)?,
            end: Duration::try_minutes(end)?,
        })
    }
}

/// Label for a slot holding `member_count` events.
pub fn overflow_label(member_count: usize) -> String {
    format!("+{} more", member_count.saturating_sub(1))
}

/// Builds the overflow entry for a slot's sorted membership.
///
/// `members` must already be in slot order (primary first). Returns None
/// when there is nothing to summarize, i.e. fewer than two members.
/// Members are cloned into the overflow entry so the source events are
/// never shared or modified. An offset that would leave the representable
/// date range is dropped and the primary's own instant is used.
pub fn synthesize_overflow(
    slot: SlotKey,
    members: &[&Event],
    offsets: OverflowOffsets,
) -> Option<OverflowEvent> {
    if members.len() < 2 {
        return None;
    }

    let primary = members[0];
    let anchor_start = primary.start.unwrap_or_else(|| slot.start());
    let anchor_end = primary.effective_end().unwrap_or(anchor_start);

    Some(OverflowEvent {
        title: overflow_label(members.len()),
        start: anchor_start
            .checked_add_signed(offsets.start)
            .unwrap_or(anchor_start),
        end: anchor_end
            .checked_add_signed(offsets.end)
            .unwrap_or(anchor_end),
        slot,
        members: members.iter().map(|event| (*event).clone()).collect(),
    })
}

/// Builds the overflow entry for a grouped slot, if it has a collision.
pub fn overflow_for_group(
    group: &SlotGroup<'_>,
    offsets: OverflowOffsets,
) -> Option<OverflowEvent> {
    synthesize_overflow(group.key, &group.members, offsets)
}

mod error;
mod filter;
mod interaction;
mod layout;
mod overflow;
mod slots;
mod types;
mod view;
mod window;

pub use error::{EventError, InteractionError, ViewModeParseError};
pub use filter::{filter_events, EventFilter};
pub use interaction::{InteractionResolver, Selection, SelectionHandler};
pub use layout::{
    compute_layout, select_layout, validate_event, DiagnosticAction, Layout, LayoutDiagnostic,
    LayoutOptions,
};
pub use overflow::{overflow_for_group, overflow_label, synthesize_overflow, OverflowOffsets};
pub use slots::{
    compare_slot_members, group_into_slots, slot_key, sort_slot_members, SlotGroup, SlotGrouping,
};
pub use types::{DisplayEntry, Event, EventKind, OverflowEvent, SlotKey, ViewMode};
pub use view::CalendarView;
pub use window::{filter_events_in_window, get_calendar_week, ViewWindow};

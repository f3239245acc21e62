//! dashcal_core - calendar event layout engine.
//!
//! Pure functions and plain data: filtering by event kind, grouping colliding
//! events into quarter-hour slots, synthesizing "+N more" overflow entries and
//! resolving user selections. Nothing in this crate performs I/O.

pub mod cache;
pub mod calendar;
pub mod serde;

use std::env;

use dashcal_core::calendar::{LayoutOptions, OverflowOffsets};

/// Overflow offsets are limited to a day either way.
const MAX_OFFSET_MINUTES: i64 = 24 * 60;

fn parse_offset(value: Option<String>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| n.abs() <= MAX_OFFSET_MINUTES)
        .unwrap_or(default)
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minutes added to the primary's start for the "+N more" box (default: 5)
    pub overflow_start_offset_minutes: i64,
    /// Minutes added to the primary's end for the "+N more" box (default: 15)
    pub overflow_end_offset_minutes: i64,
    /// Maximum number of memoized layouts (default: 32)
    pub cache_max_entries: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DASHCAL_OVERFLOW_START_OFFSET_MINUTES` - Overflow start offset (default: 5)
    /// - `DASHCAL_OVERFLOW_END_OFFSET_MINUTES` - Overflow end offset (default: 15)
    /// - `DASHCAL_CACHE_MAX_ENTRIES` - Memoized layouts kept (default: 32)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Missing, unparseable or out of range values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            overflow_start_offset_minutes: parse_offset(
                lookup("DASHCAL_OVERFLOW_START_OFFSET_MINUTES"),
                5,
            ),
            overflow_end_offset_minutes: parse_offset(
                lookup("DASHCAL_OVERFLOW_END_OFFSET_MINUTES"),
                15,
            ),
            cache_max_entries: lookup("DASHCAL_CACHE_MAX_ENTRIES")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(32),
        }
    }

    /// Layout options derived from this configuration.
    ///
    /// Offsets that cannot be represented keep the defaults.
    pub fn layout_options(&self) -> LayoutOptions {
        let offsets = OverflowOffsets::from_minutes(
            self.overflow_start_offset_minutes,
            self.overflow_end_offset_minutes,
        )
        .unwrap_or_default();
        LayoutOptions::default().with_overflow_offsets(offsets)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

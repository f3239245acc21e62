use serde::Serialize;
use thiserror::Error;

/// Problems found on an event while laying it out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventError {
    #[error("Event start is missing or unparseable")]
    MissingStart,
    #[error("Event end is missing or unparseable")]
    MissingEnd,
    #[error("Event ends before it starts")]
    EndBeforeStart,
}

/// Error returned when a view mode name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown view mode: {0} (expected month, week or day)")]
pub struct ViewModeParseError(pub String);

/// Errors raised by the interaction resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("No slot overview is open")]
    NoOverview,
    #[error("Overview has {len} events, no event at position {index}")]
    MemberOutOfRange { index: usize, len: usize },
}

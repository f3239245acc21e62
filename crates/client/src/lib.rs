//! dashcal_client - command line shell for the dashcal layout engine.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod selection;
pub mod source;

pub use error::{ClientError, Result};

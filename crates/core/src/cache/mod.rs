mod error;
mod keys;
mod memory;

pub use error::{CacheError, Result};
pub use keys::{fingerprint_events, LayoutKey};
pub use memory::LayoutCache;

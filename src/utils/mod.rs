//! Utility modules
//!
//! - Error types for host-boundary operations (file and settings IO)
//! - Trailing-edge debouncer for rescan scheduling

pub mod debounce;
pub mod error;

// Re-export commonly used items
pub use debounce::{Debouncer, DEFAULT_RESCAN_DELAY};
pub use error::{ExpanderError, ExpanderResult};

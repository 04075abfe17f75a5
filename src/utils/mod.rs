//! Utility modules for the ellipsis demo.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, format_pass_report, get_current_memory_mb};

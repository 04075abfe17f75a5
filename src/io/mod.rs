//! I/O modules for content loading.

pub mod content_loader;

// Re-export commonly used types
pub use content_loader::{load_content, LoadedContent, CONTENT_EXTENSIONS};

//! Common utility functions

pub mod path;

// Re-export commonly used utilities
pub use path::*;

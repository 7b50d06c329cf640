//! Shared configuration and utilities for the DealerDesk console core
//!
//! This crate provides the cross-cutting pieces used by the coordination
//! core:
//! - Configuration types (route table, session probe)
//! - Utility functions (path normalization)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ProbeConfig, RoutingConfig};
pub use utils::path;

//! Configuration module with coordination-specific sub-modules
//!
//! - `probe` - Session probe timeout configuration
//! - `routing` - Canonical route classification table

pub mod probe;
pub mod routing;

// Re-export commonly used types
pub use probe::ProbeConfig;
pub use routing::RoutingConfig;

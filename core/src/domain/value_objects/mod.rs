//! Value objects representing immutable domain concepts.

pub mod auth_snapshot;
pub mod route_class;
pub mod signup_flow;

// Re-export commonly used types
pub use auth_snapshot::AuthSnapshot;
pub use route_class::RouteClass;
pub use signup_flow::SignupFlow;

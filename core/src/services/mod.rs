//! Services containing the coordination logic.

pub mod coordinator;

// Re-export commonly used types
pub use coordinator::{
    AuthState, AuthSubscription, CoordinatorConfig, CoordinatorState, Phase, RouteDecision,
    SessionRoleCoordinator,
};
